use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::{
    server::{
        middleware::auth::{can, Permission},
        model::user::User,
    },
    view::{path, ViewContext},
};

pub const SITE_NAME: &str = "Library";

/// Document head and body with the site header.
///
/// The `<html>` element itself is written by [`crate::view::render`].
#[component]
pub fn Layout(title: String, ctx: ViewContext, children: Element) -> Element {
    rsx!(
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title} | {SITE_NAME}" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/daisyui@5",
            }
            script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        }
        body {
            Header { current_user: ctx.current_user.clone() }
            Page { {children} }
        }
    )
}

#[component]
pub fn Header(current_user: Option<User>) -> Element {
    let actor = current_user.as_ref();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            a {
                href: "/",
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user) = actor {
                a {
                    href: path::user(&user.slug),
                    class: "btn btn-ghost",
                    if let Some(image) = &user.image {
                        img {
                            src: "{image}",
                            alt: "",
                            class: "w-8 h-8 rounded-full",
                        }
                    }
                    "{user.name}"
                }
            }
            if can(actor, Permission::Logout) {
                a {
                    href: "/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            }
            if can(actor, Permission::Login) {
                a {
                    href: "/auth/google",
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon {
                        width: 22,
                        height: 22,
                        icon: FaGoogle
                    }
                    "Login"
                }
            }
        }
    })
}

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 max-w-5xl mx-auto {class}",
            {children}
        }
    )
}

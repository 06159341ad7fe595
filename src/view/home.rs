use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::view::{layout::Layout, render, ViewContext};

/// Landing page for anonymous visitors.
pub fn index(ctx: ViewContext) -> Response {
    render(
        StatusCode::OK,
        rsx!(
            Layout {
                title: "Welcome".to_string(),
                ctx,
                div {
                    class: "hero min-h-[60vh]",
                    div {
                        class: "hero-content text-center",
                        div {
                            class: "max-w-md flex flex-col gap-6",
                            h1 { class: "text-5xl font-bold", "Your library, online" }
                            p {
                                "Catalog the books you own, arrange them on shelves and keep the "
                                "passages worth remembering next to each one."
                            }
                            a {
                                href: "/auth/google",
                                class: "btn btn-primary gap-2",
                                Icon { width: 18, height: 18, icon: FaGoogle }
                                "Sign in with Google"
                            }
                            a { href: "/privacy", class: "link", "Privacy policy" }
                        }
                    }
                }
            }
        ),
    )
}

pub fn privacy(ctx: ViewContext) -> Response {
    render(
        StatusCode::OK,
        rsx!(
            Layout {
                title: "Privacy".to_string(),
                ctx,
                article {
                    class: "prose flex flex-col gap-4",
                    h1 { class: "text-3xl font-bold", "Privacy policy" }
                    p {
                        "Signing in with Google shares your name, email address and profile "
                        "picture with this site. They are used to identify your account and "
                        "to show your name on your public profile."
                    }
                    p {
                        "Books, shelves, highlights and uploaded images you add are stored on "
                        "this server and are visible to anyone with a link to your profile."
                    }
                    p {
                        "A session cookie keeps you logged in. It expires after seven days "
                        "without a visit or when you log out."
                    }
                }
            }
        ),
    )
}

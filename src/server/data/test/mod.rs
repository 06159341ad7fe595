mod book;
mod highlight;
mod shelf;

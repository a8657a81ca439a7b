use maud::{html, Markup, DOCTYPE};

use crate::names;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href=(format!("{}/quiz.css", names::STATIC_URL));
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
        script src="https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js" {}
        script src=(format!("{}/quiz.js", names::STATIC_URL)) {}
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main."container" { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";

            (css())
            (js())

            title { (title) }
        }

        body {
            (main(body))
        }
    }
}

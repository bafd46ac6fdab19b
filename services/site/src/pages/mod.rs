mod apply;
mod landing;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use youth_advocacy::intake::ApplicationForm;

pub(crate) const ORGANIZATION: &str = "Youth Advocacy Africa";

const STYLESHEET_SCRIPT: &str = "https://cdn.tailwindcss.com";
const ICON_SCRIPT: &str = "https://unpkg.com/lucide@latest";

fn html_page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(STYLESHEET_SCRIPT) {}
            }
            body {
                (content)
                script src=(ICON_SCRIPT) {}
                script { (PreEscaped("lucide.createIcons();")) }
            }
        }
    }
}

/// The full landing page. `acknowledgement` is shown as a modal once, after a stored
/// application.
pub(crate) fn landing_page(
    form: &ApplicationForm,
    acknowledgement: Option<&str>,
    year: i32,
) -> Markup {
    let content = html! {
        div class="min-h-screen bg-gray-50" {
            (landing::hero())
            (landing::features())
            (landing::partners())
            (landing::about())
            (apply::application_section(form))
            (landing::footer(year))
        }
        @if let Some(message) = acknowledgement {
            (apply::acknowledgement_dialog(message))
        }
    };

    html_page(ORGANIZATION, content)
}

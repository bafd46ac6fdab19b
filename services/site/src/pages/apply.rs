use maud::{html, Markup, PreEscaped};
use youth_advocacy::intake::{ApplicationForm, DraftField, FieldOfWork};

const INPUT_CLASS: &str = "w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-600 focus:border-transparent";
const BUTTON_CLASS: &str = "w-full bg-blue-600 hover:bg-blue-700 text-white font-semibold px-6 py-3 rounded-lg transition duration-300 flex items-center justify-center";

// Blocks a second submission from the same page while the first is in flight.
const DISABLE_ON_SUBMIT: &str = "this.querySelector('button[type=submit]').disabled = true";

struct TextInput {
    field: DraftField,
    kind: &'static str,
    placeholder: &'static str,
    icon: &'static str,
}

const TEXT_INPUTS: [TextInput; 5] = [
    TextInput {
        field: DraftField::FullName,
        kind: "text",
        placeholder: "Full Name",
        icon: "user",
    },
    TextInput {
        field: DraftField::Email,
        kind: "email",
        placeholder: "Email Address",
        icon: "mail",
    },
    TextInput {
        field: DraftField::Phone,
        kind: "tel",
        placeholder: "Phone Number",
        icon: "phone-call",
    },
    TextInput {
        field: DraftField::HighSchool,
        kind: "text",
        placeholder: "High School Education",
        icon: "graduation-cap",
    },
    TextInput {
        field: DraftField::University,
        kind: "text",
        placeholder: "University Education (if any)",
        icon: "building-2",
    },
];

pub(super) fn application_section(form: &ApplicationForm) -> Markup {
    let draft = form.draft();
    let submitting = form.is_submit_disabled();
    let button_class = if submitting {
        format!("{BUTTON_CLASS} opacity-75 cursor-not-allowed")
    } else {
        BUTTON_CLASS.to_string()
    };

    html! {
        div id="apply" class="py-20 bg-white" {
            div class="max-w-3xl mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-16" { "Apply Now" }
                form method="post" action="/apply" class="space-y-6" onsubmit=(DISABLE_ON_SUBMIT) {
                    @if let Some(message) = form.error_message() {
                        (error_panel(message))
                    }

                    @for input in &TEXT_INPUTS {
                        div class="relative" {
                            i data-lucide=(input.icon) class="absolute top-3 left-3 w-5 h-5 text-gray-400" {}
                            input
                                type=(input.kind)
                                name=(input.field.name())
                                value=(draft.value(input.field))
                                placeholder=(input.placeholder)
                                required[input.field.is_required()]
                                class=(INPUT_CLASS);
                        }
                    }

                    div class="relative" {
                        i data-lucide="briefcase" class="absolute top-3 left-3 w-5 h-5 text-gray-400" {}
                        select name=(DraftField::FieldOfWork.name()) required class=(INPUT_CLASS) {
                            option value="" { "Select Field of Interest" }
                            @for field in FieldOfWork::ALL {
                                @let chosen = FieldOfWork::parse(&draft.field_of_work) == Some(field);
                                option value=(field.as_str()) selected[chosen] {
                                    (field.label())
                                }
                            }
                        }
                    }

                    button type="submit" disabled[submitting] class=(button_class) {
                        i data-lucide="send" class="w-5 h-5 mr-2" {}
                        @if submitting { "Submitting..." } @else { "Submit Application" }
                    }
                }
            }
        }
    }
}

fn error_panel(message: &str) -> Markup {
    html! {
        div role="alert"
            class="flex items-start justify-between bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-lg" {
            span { (message) }
            button type="button" aria-label="Dismiss" class="ml-4 font-bold"
                onclick="this.parentElement.remove()" {
                "\u{d7}"
            }
        }
    }
}

pub(super) fn acknowledgement_dialog(message: &str) -> Markup {
    html! {
        dialog id="application-received" class="rounded-lg shadow-xl p-8 max-w-md" {
            p class="text-lg mb-6" { (message) }
            form method="dialog" class="text-right" {
                button class="bg-blue-600 hover:bg-blue-700 text-white font-semibold px-6 py-2 rounded-lg" {
                    "OK"
                }
            }
        }
        script {
            (PreEscaped("document.getElementById('application-received').showModal();"))
        }
    }
}

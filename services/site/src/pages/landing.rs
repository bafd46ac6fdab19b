use maud::{html, Markup};

use super::ORGANIZATION;

const HERO_BACKGROUND: &str = "background-image: linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.6)), url('https://images.unsplash.com/photo-1517486808906-6ca8b3f04846?ixlib=rb-1.2.1&auto=format&fit=crop&w=1920&q=80')";

const CONTACT_EMAIL: &str = "info@youthadvocacyafrica.org";
const CONTACT_PHONE: &str = "+32466292088";

struct Highlight {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Highlight; 3] = [
    Highlight {
        icon: "graduation-cap",
        title: "Quality Education",
        body: "Access to top-tier educational institutions worldwide",
    },
    Highlight {
        icon: "globe-2",
        title: "Global Network",
        body: "Partnerships with institutions across multiple countries",
    },
    Highlight {
        icon: "users",
        title: "Career Support",
        body: "Comprehensive guidance and placement assistance",
    },
];

const PARTNERS: [Highlight; 3] = [
    Highlight {
        icon: "building-2",
        title: "Universities",
        body: "Partnerships with leading universities in Europe, North America, and Asia",
    },
    Highlight {
        icon: "briefcase",
        title: "Companies",
        body: "Connections with multinational corporations for internships and job placements",
    },
    Highlight {
        icon: "book-open",
        title: "Government Programs",
        body: "Access to government-sponsored scholarship and exchange programs",
    },
];

enum AboutCopy {
    Paragraph(&'static str),
    Points(&'static [(&'static str, &'static str)]),
}

const ABOUT: [(&str, AboutCopy); 8] = [
    (
        "Our Mission",
        AboutCopy::Paragraph(
            "Empowering African youth with access to global education and work opportunities, \
             creating a workforce that thrives in the global economy. We match young Africans with \
             universities, jobs, and skilled migration programs while providing financing, mentorship, \
             and career pathways. Our reach extends beyond the U.S. to include Canada, Europe, Australia, and Asia.",
        ),
    ),
    (
        "The Opportunity",
        AboutCopy::Paragraph(
            "With 200 million African youth aged 15-24\u{2014}and 2.1 million aspiring to study abroad, \
             yet only 400,000 enrolling\u{2014}the demand for skilled African labor is soaring globally. \
             Industries such as healthcare, technology, engineering, and skilled trades are hungry for talent. \
             Africa\u{2019}s university enrollment is growing at 8.6% annually, double the global average.",
        ),
    ),
    (
        "The Challenges",
        AboutCopy::Points(&[
            ("Financial Barriers:", "Limited scholarships and private loan options."),
            (
                "Lack of Information:",
                "Many students and workers are unaware of global opportunities.",
            ),
            (
                "Work & Career Gaps:",
                "Employers struggle to connect with skilled African talent.",
            ),
            (
                "Visa & Migration Hurdles:",
                "Complex work-study and skilled migration processes.",
            ),
        ]),
    ),
    (
        "Our Solution",
        AboutCopy::Paragraph(
            "Our platform offers comprehensive support\u{2014}from financial assistance via loans and \
             scholarships to matching you with top universities and global employers. We provide mentorship, \
             skills development, and migration guidance to ensure every young African can confidently pursue \
             their global future.",
        ),
    ),
    (
        "Where You Can Go",
        AboutCopy::Paragraph(
            "Explore opportunities in the United States (with OPT), Canada (via PGWP and Express Entry), \
             Europe (through Germany\u{2019}s Blue Card and the UK\u{2019}s Skilled Worker Visa), Australia & \
             New Zealand (via work-study programs and Global Talent Visas), and Asia (Japan & South Korea\u{2019}s \
             skilled migration pathways).",
        ),
    ),
    (
        "The Impact",
        AboutCopy::Points(&[
            (
                "Career Boost:",
                "90% of students who study abroad secure employment within 6 months.",
            ),
            (
                "Higher Earnings:",
                "International degrees can increase earning potential by 2-3x.",
            ),
            (
                "Diverse Talent Pools:",
                "African graduates drive global innovation.",
            ),
            (
                "Leadership Development:",
                "We\u{2019}re shaping future business and political leaders with global experience.",
            ),
        ]),
    ),
    (
        "For Employers & Universities",
        AboutCopy::Paragraph(
            "Our partnerships give universities access to motivated, talented students and offer employers \
             a skilled, diverse workforce. This synergy not only enhances academic environments but also fuels \
             economic growth through skilled migration.",
        ),
    ),
    (
        "Join Us",
        AboutCopy::Paragraph(
            "Africa\u{2019}s future is global \u{2013} let\u{2019}s unlock the potential together. Whether \
             you\u{2019}re a student, worker, employer, or academic institution, connect with us to explore \
             transformative opportunities.",
        ),
    ),
];

pub(super) fn hero() -> Markup {
    html! {
        div class="relative bg-cover bg-center h-[600px]" style=(HERO_BACKGROUND) {
            div class="absolute inset-0 flex items-center justify-center" {
                div class="text-center text-white px-4" {
                    h1 class="text-5xl font-bold mb-6" { (ORGANIZATION) }
                    p class="text-xl mb-8 max-w-2xl" {
                        "Empowering African students to pursue international education and career \
                         opportunities through strategic partnerships."
                    }
                    a href="#apply"
                        class="bg-blue-600 hover:bg-blue-700 text-white font-semibold px-8 py-3 rounded-lg transition duration-300" {
                        "Apply Now"
                    }
                }
            }
        }
    }
}

pub(super) fn features() -> Markup {
    html! {
        div class="py-20 bg-white" {
            div class="max-w-6xl mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-16" {
                    "Why Choose " (ORGANIZATION) "?"
                }
                div class="grid md:grid-cols-3 gap-12" {
                    @for feature in &FEATURES {
                        div class="text-center" {
                            div class="flex justify-center mb-4" {
                                i data-lucide=(feature.icon) class="w-12 h-12 text-blue-600" {}
                            }
                            h3 class="text-xl font-semibold mb-3" { (feature.title) }
                            p class="text-gray-600" { (feature.body) }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn partners() -> Markup {
    html! {
        div class="py-20 bg-gray-50" {
            div class="max-w-6xl mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-16" { "Our Partners" }
                div class="grid md:grid-cols-3 gap-8" {
                    @for partner in &PARTNERS {
                        div class="bg-white p-6 rounded-lg shadow-md" {
                            i data-lucide=(partner.icon) class="w-12 h-12 text-blue-600 mb-4" {}
                            h3 class="text-xl font-semibold mb-2" { (partner.title) }
                            p class="text-gray-600" { (partner.body) }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn about() -> Markup {
    html! {
        div class="py-20 bg-blue-50" {
            div class="max-w-6xl mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-12" {
                    "Discover " (ORGANIZATION)
                }
                div class="space-y-10" {
                    @for (title, copy) in &ABOUT {
                        section {
                            h3 class="text-2xl font-semibold text-blue-800 mb-4" { (title) }
                            @match copy {
                                AboutCopy::Paragraph(text) => {
                                    p class="text-gray-700" { (text) }
                                }
                                AboutCopy::Points(points) => {
                                    ul class="list-disc list-inside text-gray-700" {
                                        @for (lead, text) in points.iter() {
                                            li { strong { (lead) } " " (text) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn footer(year: i32) -> Markup {
    html! {
        footer class="bg-gray-900 text-white py-12" {
            div class="max-w-6xl mx-auto px-4" {
                div class="grid md:grid-cols-3 gap-8" {
                    div {
                        h3 class="text-xl font-semibold mb-4" { (ORGANIZATION) }
                        p class="text-gray-400" {
                            "Empowering African youth through global education and career opportunities."
                        }
                    }
                    div {
                        h3 class="text-xl font-semibold mb-4" { "Contact Us" }
                        p class="text-gray-400" { "Email: " (CONTACT_EMAIL) }
                        p class="text-gray-400" { "Phone: " (CONTACT_PHONE) }
                    }
                    div {
                        h3 class="text-xl font-semibold mb-4" { "Follow Us" }
                        div class="flex space-x-4" {
                            @for network in ["Twitter", "LinkedIn", "Facebook"] {
                                a href="#" class="text-gray-400 hover:text-white transition duration-300" {
                                    (network)
                                }
                            }
                        }
                    }
                }
                div class="mt-8 pt-8 border-t border-gray-800 text-center text-gray-400" {
                    p { "\u{a9} " (year) " " (ORGANIZATION) ". All rights reserved." }
                }
            }
        }
    }
}

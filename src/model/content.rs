//! Page content for the Hargrove & Mercer site.
//!
//! Copy is hand-maintained here the same way the figures table is. Strings may
//! carry `{tax-…}` tokens; `SiteContent::stamped` resolves them against the
//! figures table before anything renders.

use crate::tax::{stamp_figures, TaxTable};

/// Same-page anchors, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Practice,
    Attorneys,
    Values,
    Testimonials,
    Faq,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Practice,
        SectionId::Attorneys,
        SectionId::Values,
        SectionId::Testimonials,
        SectionId::Faq,
        SectionId::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Practice => "practice",
            SectionId::Attorneys => "attorneys",
            SectionId::Values => "values",
            SectionId::Testimonials => "testimonials",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Hargrove & Mercer",
            SectionId::Practice => "Practice Areas",
            SectionId::Attorneys => "Our Attorneys",
            SectionId::Values => "How We Work",
            SectionId::Testimonials => "What Clients Say",
            SectionId::Faq => "Common Questions",
            SectionId::Contact => "Get In Touch",
        }
    }
}

/// Where a nav entry leads. Entries that point at another page navigate
/// outside this program; ones with a fragment still close the menu first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Section(SectionId),
    External {
        page: String,
        fragment: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeArea {
    pub title: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attorney {
    pub name: String,
    pub role: String,
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttorneyGroup {
    pub heading: String,
    pub members: Vec<Attorney>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueItem {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub client: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub nav: Vec<NavEntry>,
    pub hero_heading: String,
    pub hero_tagline: String,
    pub practice_areas: Vec<PracticeArea>,
    pub attorney_groups: Vec<AttorneyGroup>,
    pub values: Vec<ValueItem>,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
    /// Footer line carrying the `© YYYY` to be restamped with the current year.
    pub copyright: String,
    pub privacy_policy_label: String,
}

impl SiteContent {
    pub fn builtin() -> Self {
        Self {
            nav: vec![
                nav_section("Home", SectionId::Home),
                nav_section("Practice Areas", SectionId::Practice),
                nav_section("Attorneys", SectionId::Attorneys),
                nav_section("Testimonials", SectionId::Testimonials),
                nav_section("FAQ", SectionId::Faq),
                nav_section("Contact", SectionId::Contact),
                NavEntry {
                    label: "Client Portal".to_string(),
                    target: NavTarget::External {
                        page: "portal.html".to_string(),
                        fragment: Some("login".to_string()),
                    },
                },
            ],
            hero_heading: "Planning today for the people you love tomorrow".to_string(),
            hero_tagline: "Estate planning, probate and elder law counsel serving \
                           Washtenaw County families for over thirty years."
                .to_string(),
            practice_areas: vec![
                PracticeArea {
                    title: "Estate Planning".to_string(),
                    blurb: "Wills, trusts and beneficiary planning built around the \
                            {tax-current-year} rules, including the {tax-annual-gift} \
                            annual gift exclusion."
                        .to_string(),
                },
                PracticeArea {
                    title: "Trust & Estate Administration".to_string(),
                    blurb: "Guiding trustees and personal representatives through \
                            every filing, notice and distribution."
                        .to_string(),
                },
                PracticeArea {
                    title: "Federal Estate Tax".to_string(),
                    blurb: "Strategies for estates near the {tax-estate-exemption} \
                            exemption ({tax-estate-exemption-year}), or \
                            {tax-estate-exemption-married} for married couples."
                        .to_string(),
                },
                PracticeArea {
                    title: "Elder Law & Medicaid".to_string(),
                    blurb: "Long-term-care planning that protects a lifetime of \
                            savings."
                        .to_string(),
                },
            ],
            attorney_groups: vec![
                AttorneyGroup {
                    heading: "Partners".to_string(),
                    members: vec![
                        Attorney {
                            name: "Eleanor Hargrove".to_string(),
                            role: "Managing Partner".to_string(),
                            bio: vec![
                                "Eleanor has practiced estate and trust law since 1992."
                                    .to_string(),
                                "Fellow of the American College of Trust and Estate Counsel."
                                    .to_string(),
                            ],
                        },
                        Attorney {
                            name: "Daniel Mercer".to_string(),
                            role: "Partner, Tax".to_string(),
                            bio: vec![
                                "Daniel counsels families on federal estate and gift tax."
                                    .to_string(),
                                "LL.M. in Taxation, New York University.".to_string(),
                            ],
                        },
                    ],
                },
                AttorneyGroup {
                    heading: "Associates".to_string(),
                    members: vec![
                        Attorney {
                            name: "Priya Raman".to_string(),
                            role: "Associate".to_string(),
                            bio: vec![
                                "Priya focuses on probate administration and \
                                 guardianships."
                                    .to_string(),
                            ],
                        },
                        Attorney {
                            name: "Thomas Okafor".to_string(),
                            role: "Associate".to_string(),
                            bio: vec![
                                "Thomas drafts trusts and advises on Medicaid \
                                 eligibility."
                                    .to_string(),
                            ],
                        },
                    ],
                },
            ],
            values: vec![
                ValueItem {
                    title: "Plain answers".to_string(),
                    detail: "We explain the law in the language you use at your \
                             kitchen table."
                        .to_string(),
                },
                ValueItem {
                    title: "Flat fees".to_string(),
                    detail: "Most planning engagements are quoted up front, in \
                             writing."
                        .to_string(),
                },
                ValueItem {
                    title: "Long relationships".to_string(),
                    detail: "Plans are reviewed as families, assets and the law \
                             change."
                        .to_string(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "They made a process we had dreaded for years feel \
                            simple and even hopeful."
                        .to_string(),
                    client: "M. & J. Whitfield, Ann Arbor".to_string(),
                },
                Testimonial {
                    quote: "Every question answered the same day. Our trust was \
                            done in three weeks."
                        .to_string(),
                    client: "R. Castellanos, Saline".to_string(),
                },
                Testimonial {
                    quote: "After my husband passed, they handled the estate so I \
                            could grieve in peace."
                        .to_string(),
                    client: "D. Lindqvist, Chelsea".to_string(),
                },
                Testimonial {
                    quote: "Genuinely kind people who happen to be excellent \
                            lawyers."
                        .to_string(),
                    client: "The Okonkwo family, Ypsilanti".to_string(),
                },
                Testimonial {
                    quote: "They caught a beneficiary mistake our old plan had \
                            carried for a decade."
                        .to_string(),
                    client: "B. Feldman, Dexter".to_string(),
                },
                Testimonial {
                    quote: "Five stars. We have sent both of our adult children \
                            to them."
                        .to_string(),
                    client: "G. & P. Marsh, Manchester".to_string(),
                },
            ],
            faq: vec![
                FaqEntry {
                    question: "Do I need a trust, or is a will enough?".to_string(),
                    answer: "It depends on your assets, your family and how much \
                             probate you want to avoid. Most homeowners benefit \
                             from a revocable living trust."
                        .to_string(),
                },
                FaqEntry {
                    question: "How much can I give away each year without a gift \
                              tax return?"
                        .to_string(),
                    answer: "The annual exclusion is {tax-annual-gift} per \
                             recipient for {tax-annual-gift-year}."
                        .to_string(),
                },
                FaqEntry {
                    question: "Will my estate owe federal estate tax?".to_string(),
                    answer: "Only estates above {tax-estate-exemption} \
                             ({tax-estate-exemption-year}) owe federal estate tax; \
                             married couples can shelter {tax-estate-exemption-married} \
                             with portability."
                        .to_string(),
                },
                FaqEntry {
                    question: "What happens at the first meeting?".to_string(),
                    answer: "A confidential hour, no obligation. Bring a rough list \
                             of assets and the names of the people you trust."
                        .to_string(),
                },
            ],
            copyright: "© 2024 Hargrove & Mercer, Attorneys at Law. All rights reserved."
                .to_string(),
            privacy_policy_label: "Privacy policy last updated".to_string(),
        }
    }

    /// Resolve every `{tax-…}` token against `table` as of `year`.
    pub fn stamped(&self, table: &TaxTable, year: i32) -> SiteContent {
        let mut stamped = self.clone();
        for area in &mut stamped.practice_areas {
            area.blurb = stamp_figures(&area.blurb, table, year);
        }
        for entry in &mut stamped.faq {
            entry.question = stamp_figures(&entry.question, table, year);
            entry.answer = stamp_figures(&entry.answer, table, year);
        }
        stamped.hero_tagline = stamp_figures(&stamped.hero_tagline, table, year);
        stamped
    }

    pub fn attorney_count(&self) -> usize {
        self.attorney_groups
            .iter()
            .map(|group| group.members.len())
            .sum()
    }

    /// Attorney at flattened index, walking groups in order.
    pub fn attorney(&self, index: usize) -> Option<&Attorney> {
        self.attorney_groups
            .iter()
            .flat_map(|group| group.members.iter())
            .nth(index)
    }
}

fn nav_section(label: &str, section: SectionId) -> NavEntry {
    NavEntry {
        label: label.to_string(),
        target: NavTarget::Section(section),
    }
}

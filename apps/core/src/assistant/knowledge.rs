//! Static knowledge base for the heritage assistant.
//!
//! Both tables are ordered: lookups walk them front to back and the first
//! matching entry wins.

/// Curated question/answer record keyed by a short lowercase phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub key: &'static str,
    pub answer: &'static str,
    pub suggestions: &'static [&'static str],
}

/// Extra detail attached to a site. At most one kind per site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteExtra {
    Features(&'static str),
    VisitInfo(&'static str),
    Highlights(&'static str),
    Activities(&'static str),
    None,
}

impl SiteExtra {
    pub fn text(&self) -> &'static str {
        match self {
            SiteExtra::Features(text)
            | SiteExtra::VisitInfo(text)
            | SiteExtra::Highlights(text)
            | SiteExtra::Activities(text) => text,
            SiteExtra::None => "",
        }
    }
}

/// Heritage site facts, matched by identifier or display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteEntry {
    /// Lowercase identifier
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub significance: &'static str,
    pub extra: SiteExtra,
}

pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        key: "what is lalibela",
        answer: "Lalibela is a UNESCO World Heritage Site in northern Ethiopia, famous for its 11 \
                 rock-hewn churches carved out of solid volcanic rock during the reign of King \
                 Gebre Meskel Lalibela in the late 12th and early 13th centuries.",
        suggestions: &[
            "How were the Lalibela churches built?",
            "When is the best time to visit Lalibela?",
            "Tell me about Bete Giyorgis",
        ],
    },
    KnowledgeEntry {
        key: "coffee ceremony",
        answer: "The Ethiopian coffee ceremony is a cherished ritual of hospitality. Green beans \
                 are roasted over charcoal, ground by hand and brewed in a clay jebena, then \
                 served in three rounds: abol, tona and baraka.",
        suggestions: &[
            "Where did coffee originate?",
            "Which snacks come with the coffee ceremony?",
            "Tell me about Ethiopian cuisine",
        ],
    },
    KnowledgeEntry {
        key: "timkat festival",
        answer: "Timkat is the Ethiopian Orthodox celebration of Epiphany, held every January 19 \
                 (20 in leap years). Replicas of the Ark of the Covenant, called tabots, are \
                 carried in procession to water where the baptism of Christ is re-enacted.",
        suggestions: &[
            "Where can I see the Timkat festival?",
            "Tell me about Meskel",
            "Show me Gondar",
        ],
    },
    KnowledgeEntry {
        key: "meskel celebration",
        answer: "Meskel commemorates the finding of the True Cross and is celebrated on \
                 September 27 with a great bonfire called the Demera. UNESCO inscribed it as \
                 Intangible Cultural Heritage in 2013.",
        suggestions: &[
            "Tell me about Timkat",
            "Which other festivals are there?",
            "Show me Addis Ababa",
        ],
    },
    KnowledgeEntry {
        key: "ge'ez script",
        answer: "Ge'ez, or Fidel, is the abugida used to write Amharic, Tigrinya and other \
                 Ethiopian languages. It grew out of the ancient South Arabian script and is one \
                 of the oldest writing systems still in use in Africa.",
        suggestions: &[
            "Can I take an Amharic course?",
            "Tell me about ancient manuscripts",
            "Show me Aksum",
        ],
    },
    KnowledgeEntry {
        key: "lucy fossil",
        answer: "Lucy, known in Amharic as Dinkinesh, is a 3.2-million-year-old Australopithecus \
                 afarensis skeleton discovered in 1974 in the Afar Region. The original is kept \
                 at the National Museum of Ethiopia in Addis Ababa.",
        suggestions: &[
            "Tell me about the National Museum",
            "Which other fossils were found in Ethiopia?",
            "Show me the Afar Region",
        ],
    },
    KnowledgeEntry {
        key: "injera",
        answer: "Injera is a spongy sourdough flatbread made from teff flour. It serves as both \
                 plate and utensil for stews (wat) and sits at the heart of Ethiopian cuisine.",
        suggestions: &[
            "Tell me about teff",
            "Tell me about the coffee ceremony",
            "Which traditional Ethiopian dishes should I try?",
        ],
    },
    KnowledgeEntry {
        key: "calendar",
        answer: "Ethiopia follows its own calendar of 13 months: twelve months of 30 days and a \
                 short thirteenth month, Pagume, of five or six days. It runs seven to eight \
                 years behind the Gregorian calendar, and the new year (Enkutatash) falls on \
                 September 11.",
        suggestions: &[
            "When does Enkutatash fall?",
            "How do Ethiopians tell time?",
            "Tell me about Ethiopian festivals",
        ],
    },
];

pub static SITES: &[SiteEntry] = &[
    SiteEntry {
        id: "lalibela",
        name: "Lalibela",
        description: "a pilgrimage town famous for eleven monolithic churches carved directly \
                      into volcanic rock",
        location: "the Amhara Region",
        significance: "it is still an active place of worship and is often called the New \
                       Jerusalem",
        extra: SiteExtra::Features(
            "Its best-known church, Bete Giyorgis, is cut in the shape of a cross.",
        ),
    },
    SiteEntry {
        id: "aksum",
        name: "Aksum",
        description: "the ancient capital of the Kingdom of Aksum, one of the great trading \
                      powers of the ancient world",
        location: "Axum, Tigray Region",
        significance: "its towering stelae and royal tombs record the rise of one of Africa's \
                       earliest Christian states",
        extra: SiteExtra::Highlights(
            "Highlights include the Obelisk of Aksum, the Church of Our Lady Mary of Zion and \
             the ruins of Dungur palace.",
        ),
    },
    SiteEntry {
        id: "gondar",
        name: "Gondar",
        description: "the 17th-century royal capital founded by Emperor Fasilides",
        location: "the Amhara Region, north of Lake Tana",
        significance: "the Fasil Ghebbi fortress enclosure blends Nubian, Arab and Baroque \
                       architecture",
        extra: SiteExtra::VisitInfo(
            "The Fasil Ghebbi compound is open daily, and Fasilides' Bath draws crowds during \
             Timkat every January.",
        ),
    },
    SiteEntry {
        id: "fasil-ghebbi",
        name: "Fasil Ghebbi",
        description: "the fortress enclosure of the Gondarine emperors",
        location: "the centre of Gondar, Amhara Region",
        significance: "its castles, churches and bathing palace were inscribed as a UNESCO \
                       World Heritage Site in 1979",
        extra: SiteExtra::Features(
            "The walls enclose Fasilides' Castle, the library of Yohannes I and the banqueting \
             hall of Iyasu I.",
        ),
    },
    SiteEntry {
        id: "simien",
        name: "Simien Mountains National Park",
        description: "a dramatic highland massif of jagged peaks and deep gorges",
        location: "the North Gondar Zone",
        significance: "it shelters endemic wildlife such as the gelada and the Walia ibex",
        extra: SiteExtra::Activities(
            "Popular activities include multi-day treks, climbing Ras Dashen and wildlife \
             watching.",
        ),
    },
    SiteEntry {
        id: "harar",
        name: "Harar Jugol",
        description: "a walled city of 82 mosques and hundreds of narrow alleyways",
        location: "the Harari Region in eastern Ethiopia",
        significance: "it is regarded as the fourth holiest city of Islam",
        extra: SiteExtra::None,
    },
];

/// Suggestions attached to every site reply.
pub const SITE_SUGGESTIONS: &[&str] = &[
    "Tell me about other heritage sites",
    "What's the best time to visit?",
    "Show me this on the map",
];

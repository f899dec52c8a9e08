//! Festivals and public holidays for BS 2080 through 2083.
//!
//! Static lookup data keyed by BS date; nothing here is computed from
//! calendar rules.

use serde::Serialize;

use crate::prelude::*;
use crate::types::BsDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[display(fmt = "festival")]
    Festival,
    #[display(fmt = "national")]
    National,
    #[display(fmt = "religious")]
    Religious,
    #[display(fmt = "cultural")]
    Cultural,
}

/// A festival or holiday observed on one BS date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    /// BS `(year, month, day)`
    pub date: (u16, u8, u8),
    pub name: &'static str,
    pub name_np: &'static str,
    pub description: &'static str,
    pub is_holiday: bool,
    pub category: EventCategory,
}

/// Events for a BS date, empty when there are none.
pub fn events_on(date: &BsDate) -> &'static [Event] {
    let key = date.to_ymd();
    let start = EVENTS.partition_point(|event| event.date < key);
    let end = start + EVENTS[start..].partition_point(|event| event.date == key);
    &EVENTS[start..end]
}

/// Whether any event on `date` is a public holiday.
pub fn is_holiday(date: &BsDate) -> bool {
    events_on(date).iter().any(|event| event.is_holiday)
}

/// All events within BS `year`, in date order.
pub fn events_in_year(year: u16) -> &'static [Event] {
    let start = EVENTS.partition_point(|event| event.date.0 < year);
    let end = EVENTS.partition_point(|event| event.date.0 <= year);
    &EVENTS[start..end]
}

// Sorted by date
static EVENTS: &[Event] = &[
    Event {
        date: (2080, 1, 1),
        name: "Nepali New Year 2080",
        name_np: "नयाँ वर्ष २०८०",
        description: "The first day of Baishakh marks the beginning of the Bikram Sambat new year.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2080, 1, 11),
        name: "Rato Machhindranath Jatra",
        name_np: "रातो मछिन्द्रनाथ जात्रा",
        description: "An ancient chariot festival celebrated in Lalitpur (Patan).",
        is_holiday: false,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2080, 2, 1),
        name: "Buddha Jayanti",
        name_np: "बुद्ध जयन्ती",
        description: "Celebrates the birth, enlightenment, and death of Gautama Buddha at Lumbini.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2080, 4, 15),
        name: "Janai Purnima / Raksha Bandhan",
        name_np: "जनै पूर्णिमा / रक्षा बन्धन",
        description: "Sacred thread ceremony. Brahmins change their Janai (sacred thread) and sisters tie Rakhi to brothers.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2080, 4, 27),
        name: "Gaijatra",
        name_np: "गाईजात्रा",
        description: "Festival of cows. Families who lost members parade through streets in Bhaktapur.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2080, 5, 3),
        name: "Krishna Janmashtami",
        name_np: "कृष्ण जन्माष्टमी",
        description: "Celebrates the birth of Lord Krishna. Devotees flock to Krishna Mandir in Patan.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2080, 5, 18),
        name: "Teej",
        name_np: "तीज",
        description: "Women's festival dedicated to Goddess Parvati. Women fast and pray for marital bliss.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2080, 6, 9),
        name: "Ghatasthapana (Dashain Start)",
        name_np: "घटस्थापना (दशैं सुरु)",
        description: "The first day of the 15-day Dashain festival. A sacred kalash is established.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 6, 15),
        name: "Fulpati",
        name_np: "फूलपाती",
        description: "The seventh day of Dashain when a bouquet of sacred flowers is brought to the Dashain Ghar.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 6, 16),
        name: "Maha Ashtami",
        name_np: "महा अष्टमी",
        description: "The eighth day of Dashain. Mass animal sacrifices in temples across Nepal.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 6, 17),
        name: "Maha Navami",
        name_np: "महा नवमी",
        description: "The ninth day of Dashain. Final day of sacrifices and worship of Goddess Durga.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 6, 18),
        name: "Vijaya Dashami",
        name_np: "विजय दशमी",
        description: "The most important day of Dashain. Elders place tika and jamara on younger family members.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 7, 2),
        name: "Kaag Tihar",
        name_np: "काग तिहार",
        description: "First day of the five-day Tihar festival. Crows are worshipped as messengers of death.",
        is_holiday: false,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 7, 3),
        name: "Kukur Tihar",
        name_np: "कुकुर तिहार",
        description: "Second day of Tihar. Dogs are worshipped and honored with tika, garlands and treats.",
        is_holiday: false,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 7, 4),
        name: "Laxmi Puja / Gai Tihar",
        name_np: "लक्ष्मी पूजा / गाई तिहार",
        description: "Goddess Laxmi is worshipped at night. Homes are cleaned and decorated with lights and rangoli.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 7, 5),
        name: "Govardhan Puja / Mha Puja",
        name_np: "गोवर्धन पूजा / म्ह पूजा",
        description: "Newari New Year. Oxen are worshipped. Newar community celebrates self-worship (Mha Puja).",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 7, 6),
        name: "Bhai Tika",
        name_np: "भाइ टीका",
        description: "The final and most important day of Tihar. Sisters place tika on brothers for protection.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 7, 12),
        name: "Chhath Parva",
        name_np: "छठ पर्व",
        description: "Ancient Hindu festival dedicated to the Sun God. Devotees fast and pray on riverbanks.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2080, 10, 1),
        name: "Maghe Sankranti",
        name_np: "माघे सक्रान्ती",
        description: "Marks the transition of the Sun into Makar rashi. Special foods like ghee, yam, and sesame are eaten.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2080, 10, 15),
        name: "Sonam Lhosar",
        name_np: "सोनाम ल्होसार",
        description: "Tamang New Year celebrated with feasts, dances, and cultural programs.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2080, 11, 7),
        name: "Maha Shivaratri",
        name_np: "महा शिवरात्री",
        description: "Night of Lord Shiva. Devotees fast and visit Pashupatinath Temple in Kathmandu.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2080, 11, 18),
        name: "Fagu Purnima (Holi)",
        name_np: "फागु पूर्णिमा (होली)",
        description: "Festival of colors. People play with colored powder and water to celebrate spring.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2080, 12, 7),
        name: "Ghode Jatra",
        name_np: "घोडे जात्रा",
        description: "Horse racing festival in Tundikhel, Kathmandu to ward off evil spirits.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2080, 12, 17),
        name: "Ram Navami",
        name_np: "राम नवमी",
        description: "Birthday of Lord Ram. Devotees visit temples and listen to recitations of Ramayana.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 1, 1),
        name: "Nepali New Year 2081",
        name_np: "नयाँ वर्ष २०८१",
        description: "The first day of Baishakh marks the beginning of the Bikram Sambat new year.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2081, 2, 4),
        name: "Buddha Jayanti",
        name_np: "बुद्ध जयन्ती",
        description: "Celebrates the birth, enlightenment, and death of Gautama Buddha.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 3, 15),
        name: "Republic Day",
        name_np: "गणतन्त्र दिवस",
        description: "Celebrates the establishment of the Federal Democratic Republic of Nepal in 2008.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2081, 4, 16),
        name: "Janai Purnima",
        name_np: "जनै पूर्णिमा",
        description: "Sacred thread ceremony. Brahmins change their Janai (sacred thread).",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 5, 3),
        name: "Krishna Janmashtami",
        name_np: "कृष्ण जन्माष्टमी",
        description: "Celebrates the birth of Lord Krishna.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 5, 17),
        name: "Teej",
        name_np: "तीज",
        description: "Women's festival dedicated to Goddess Parvati.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 6, 7),
        name: "Ghatasthapana (Dashain Start)",
        name_np: "घटस्थापना",
        description: "First day of the 15-day Dashain festival.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2081, 6, 17),
        name: "Vijaya Dashami",
        name_np: "विजय दशमी",
        description: "The most important day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2081, 7, 3),
        name: "Kaag Tihar",
        name_np: "काग तिहार",
        description: "First day of Tihar. Crows are worshipped.",
        is_holiday: false,
        category: EventCategory::Festival,
    },
    Event {
        date: (2081, 7, 7),
        name: "Bhai Tika",
        name_np: "भाइ टीका",
        description: "Final day of Tihar. Sisters place tika on brothers.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2081, 7, 11),
        name: "Chhath Parva",
        name_np: "छठ पर्व",
        description: "Ancient Hindu festival dedicated to the Sun God.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 9, 10),
        name: "Christmas Day",
        name_np: "क्रिसमस",
        description: "Although not a national holiday, Christmas is celebrated by Christian communities in Nepal.",
        is_holiday: false,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2081, 10, 1),
        name: "Maghe Sankranti",
        name_np: "माघे सक्रान्ती",
        description: "Marks the transition of the Sun into Makar rashi.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2081, 11, 5),
        name: "Maha Shivaratri",
        name_np: "महा शिवरात्री",
        description: "Night of Lord Shiva.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2081, 11, 16),
        name: "Fagu Purnima (Holi)",
        name_np: "फागु पूर्णिमा (होली)",
        description: "Festival of colors celebrating spring.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 1, 1),
        name: "Nepali New Year 2082",
        name_np: "नयाँ वर्ष २०८२",
        description: "The first day of Baishakh marks the beginning of the Bikram Sambat new year.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2082, 1, 19),
        name: "Labour Day",
        name_np: "श्रमिक दिवस",
        description: "International Workers' Day, a public holiday in Nepal.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2082, 2, 1),
        name: "Buddha Jayanti",
        name_np: "बुद्ध जयन्ती",
        description: "Celebrates the birth, enlightenment, and death of Gautama Buddha.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2082, 3, 15),
        name: "Republic Day",
        name_np: "गणतन्त्र दिवस",
        description: "Celebrates the Federal Democratic Republic of Nepal.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2082, 5, 18),
        name: "Teej",
        name_np: "तीज",
        description: "Women's festival dedicated to Goddess Parvati.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2082, 6, 6),
        name: "Ghatasthapana (Dashain Start)",
        name_np: "घटस्थापना",
        description: "First day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 6, 13),
        name: "Fulpati",
        name_np: "फूलपाती",
        description: "Seventh day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 6, 14),
        name: "Maha Ashtami",
        name_np: "महा अष्टमी",
        description: "Eighth day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 6, 15),
        name: "Maha Navami",
        name_np: "महा नवमी",
        description: "Ninth day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 6, 16),
        name: "Vijaya Dashami",
        name_np: "विजय दशमी",
        description: "The main day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 7, 2),
        name: "Kaag Tihar",
        name_np: "काग तिहार",
        description: "First day of Tihar.",
        is_holiday: false,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 7, 3),
        name: "Kukur Tihar",
        name_np: "कुकुर तिहार",
        description: "Dogs are worshipped with garlands and treats.",
        is_holiday: false,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 7, 4),
        name: "Laxmi Puja",
        name_np: "लक्ष्मी पूजा",
        description: "Goddess Laxmi is worshipped. Homes decorated with lights.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 7, 6),
        name: "Bhai Tika",
        name_np: "भाइ टीका",
        description: "Sisters place tika on brothers' foreheads.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2082, 7, 10),
        name: "Chhath Parva",
        name_np: "छठ पर्व",
        description: "Sun worship festival.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2082, 10, 1),
        name: "Maghe Sankranti",
        name_np: "माघे सक्रान्ती",
        description: "Winter solstice celebration with traditional foods.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2082, 11, 7),
        name: "Maha Shivaratri",
        name_np: "महा शिवरात्री",
        description: "Night of Lord Shiva.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2082, 11, 18),
        name: "Fagu Purnima (Holi)",
        name_np: "फागु पूर्णिमा (होली)",
        description: "Festival of colors.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2083, 1, 1),
        name: "Nepali New Year 2083",
        name_np: "नयाँ वर्ष २०८३",
        description: "The first day of Baishakh marks the beginning of the Bikram Sambat new year.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2083, 2, 5),
        name: "Buddha Jayanti",
        name_np: "बुद्ध जयन्ती",
        description: "Celebrates the birth of Gautama Buddha.",
        is_holiday: true,
        category: EventCategory::Religious,
    },
    Event {
        date: (2083, 3, 15),
        name: "Republic Day",
        name_np: "गणतन्त्र दिवस",
        description: "National holiday celebrating Nepal's republic.",
        is_holiday: true,
        category: EventCategory::National,
    },
    Event {
        date: (2083, 6, 16),
        name: "Vijaya Dashami",
        name_np: "विजय दशमी",
        description: "The main day of Dashain.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2083, 7, 6),
        name: "Bhai Tika",
        name_np: "भाइ टीका",
        description: "Final day of Tihar.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
    Event {
        date: (2083, 10, 1),
        name: "Maghe Sankranti",
        name_np: "माघे सक्रान्ती",
        description: "Winter solstice celebration.",
        is_holiday: true,
        category: EventCategory::Cultural,
    },
    Event {
        date: (2083, 11, 8),
        name: "Fagu Purnima (Holi)",
        name_np: "फागु पूर्णिमा (होली)",
        description: "Festival of colors.",
        is_holiday: true,
        category: EventCategory::Festival,
    },
];

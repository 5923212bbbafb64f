//! Static service catalog. Display text lives in the locale files; this holds
//! the structure (keys, durations, prices) the page renders from.

use serde::Serialize;
use std::borrow::Cow;

pub struct ServiceItem {
    pub key: &'static str,
    pub duration_minutes: u32,
    pub price: &'static str,
}

pub const SERVICES: [ServiceItem; 3] = [
    ServiceItem {
        key: "individual",
        duration_minutes: 50,
        price: "$150",
    },
    ServiceItem {
        key: "couples",
        duration_minutes: 60,
        price: "$180",
    },
    ServiceItem {
        key: "mindfulness",
        duration_minutes: 45,
        price: "$120",
    },
];

impl ServiceItem {
    fn title(&self, locale: &str) -> Cow<'static, str> {
        match self.key {
            "couples" => t!("services.couples.title", locale = locale),
            "mindfulness" => t!("services.mindfulness.title", locale = locale),
            _ => t!("services.individual.title", locale = locale),
        }
    }

    fn description(&self, locale: &str) -> Cow<'static, str> {
        match self.key {
            "couples" => t!("services.couples.description", locale = locale),
            "mindfulness" => t!("services.mindfulness.description", locale = locale),
            _ => t!("services.individual.description", locale = locale),
        }
    }
}

/// A catalog entry with its strings resolved for one locale, ready for the
/// template context.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedService {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: &'static str,
}

pub fn localized_services(locale: &str) -> Vec<LocalizedService> {
    SERVICES
        .iter()
        .map(|service| LocalizedService {
            title: service.title(locale).into_owned(),
            description: service.description(locale).into_owned(),
            duration: t!(
                "services.duration",
                locale = locale,
                mins = service.duration_minutes
            )
            .into_owned(),
            price: service.price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_published_offerings() {
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(SERVICES[0].duration_minutes, 50);
        assert_eq!(SERVICES[1].price, "$180");
    }

    #[test]
    fn localizes_titles_per_language() {
        let en = localized_services("en");
        let zh = localized_services("zh");

        assert_eq!(en[0].title, "Individual Therapy");
        assert_eq!(zh[0].title, "个人咨询");
        assert_ne!(en[1].description, zh[1].description);
    }

    #[test]
    fn durations_are_interpolated() {
        let en = localized_services("en");
        assert_eq!(en[0].duration, "50 mins");

        let zh = localized_services("zh");
        assert_eq!(zh[2].duration, "45分钟");
    }
}

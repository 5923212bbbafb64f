use anyhow::Result;
use serde_json::{Value, json};
use tera::Tera;

/// Templates ship inside the binary; nothing is read from disk at runtime.
pub fn build_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("index.html", include_str!("../../templates/index.html")),
    ])?;
    Ok(tera)
}

/// Every display string the page needs, resolved for one locale. Templates
/// stay logic-free; the string table is the single source of page text.
pub fn page_strings(locale: &str) -> Value {
    json!({
        "site_name": t!("site.name", locale = locale),
        "tagline": t!("site.tagline", locale = locale),

        "nav_services": t!("nav.services", locale = locale),
        "nav_reviews": t!("nav.reviews", locale = locale),
        "nav_contact": t!("nav.contact", locale = locale),
        "lang_switch": t!("nav.lang_switch", locale = locale),

        "hero_title": t!("hero.title", locale = locale),
        "hero_subtitle": t!("hero.subtitle", locale = locale),
        "hero_cta": t!("hero.cta", locale = locale),

        "profile_title": t!("profile.title", locale = locale),
        "profile_name": t!("profile.name", locale = locale),
        "profile_credentials": t!("profile.credentials", locale = locale),
        "profile_body": t!("profile.body", locale = locale),

        "services_title": t!("services.title", locale = locale),
        "services_subtitle": t!("services.subtitle", locale = locale),

        "reviews_title": t!("reviews.title", locale = locale),
        "reviews_subtitle": t!("reviews.subtitle", locale = locale),
        "reviews_subtitle_live": t!("reviews.subtitle_live", locale = locale),
        "reviews_connecting": t!("reviews.connecting", locale = locale),
        "reviews_view_all": t!("reviews.view_all", locale = locale),

        "contact_title": t!("contact.title", locale = locale),
        "contact_subtitle": t!("contact.subtitle", locale = locale),
        "contact_form_title": t!("contact.form_title", locale = locale),
        "contact_name": t!("contact.name", locale = locale),
        "contact_name_ph": t!("contact.name_ph", locale = locale),
        "contact_concern": t!("contact.concern", locale = locale),
        "contact_concern_ph": t!("contact.concern_ph", locale = locale),
        "contact_type": t!("contact.type", locale = locale),
        "contact_individual": t!("contact.individual", locale = locale),
        "contact_couple": t!("contact.couple", locale = locale),
        "contact_consult": t!("contact.consult", locale = locale),
        "contact_submit": t!("contact.submit", locale = locale),
        "contact_location_title": t!("contact.location_title", locale = locale),
        "contact_directions": t!("contact.directions", locale = locale),

        "footer_note": t!("footer.note", locale = locale),
    })
}

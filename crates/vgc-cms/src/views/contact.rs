//! Contact page.

use serde::Serialize;
use serde_json::Value;

use super::layout::phone_href;
use super::PageMeta;
use crate::media::MediaResolver;
use crate::model::{PageSet, ValueExt, NULL};

const ADDRESS_ICON: &str = "/public/images/location.svg";
const MAP_IMAGE: &str = "/public/images/map.svg";

/// One line of an address card. `link` makes the value clickable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub label: String,
    pub value: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddressCard {
    pub title: String,
    pub icon: String,
    pub details: Vec<ContactDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub meta: PageMeta,
    pub form_title: String,
    pub addresses: Vec<AddressCard>,
    pub map_image: String,
    pub locations: Vec<Location>,
}

pub fn map(pages: &PageSet, media: &MediaResolver) -> ContactView {
    let page = pages
        .by_type_or_slug("contact")
        .or_else(|| pages.by_slug("contact-us"));
    let section = page
        .and_then(|p| p.block("address_section"))
        .or_else(|| pages.blocks("address_section").next())
        .unwrap_or(&NULL);
    let raw = section.list("addresses");

    ContactView {
        meta: PageMeta::for_page(page, "Contact Us"),
        form_title: section.text_or(&["form_title", "title"], "Get In Touch"),
        addresses: raw.iter().map(|a| address_card(a, media)).collect(),
        map_image: media.or_local(section.text("map_image"), MAP_IMAGE),
        locations: raw
            .iter()
            .filter_map(|a| {
                Some(Location {
                    name: a.first_text(&["short_address", "title", "full_address"])?.to_string(),
                    link: a.text("map_url")?.to_string(),
                })
            })
            .collect(),
    }
}

fn address_card(address: &Value, media: &MediaResolver) -> AddressCard {
    let mut details = Vec::new();

    if let Some(full) = address.first_text(&["full_address", "address"]) {
        details.push(ContactDetail {
            label: String::new(),
            value: full.to_string(),
            link: address.text("map_url").map(str::to_string),
        });
    }
    if let Some(phone) = address.text("phone") {
        details.push(ContactDetail {
            label: "Phone:".to_string(),
            value: phone.to_string(),
            link: Some(phone_href(phone)),
        });
    }
    if let Some(whatsapp) = address.text("whatsapp") {
        let digits: String = whatsapp.chars().filter(char::is_ascii_digit).collect();
        details.push(ContactDetail {
            label: "WhatsApp:".to_string(),
            value: whatsapp.to_string(),
            link: (!digits.is_empty()).then(|| format!("https://wa.me/{digits}")),
        });
    }
    if let Some(email) = address.text("email") {
        details.push(ContactDetail {
            label: "Email:".to_string(),
            value: email.to_string(),
            link: Some(format!("mailto:{}", email.trim())),
        });
    }

    AddressCard {
        title: address.text_or(&["title", "short_address"], "Office"),
        icon: media.or_local(address.text("icon"), ADDRESS_ICON),
        details,
    }
}

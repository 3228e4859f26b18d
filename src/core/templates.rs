use crate::utils::error::Result;
use tera::Tera;

pub const CARD_TEMPLATE: &str = "card.html";
pub const PAGE_TEMPLATE: &str = "page.html";

/// Builds the template set. Both names end in `.html`, so tera escapes every
/// interpolated value unless a template marks it `safe`.
pub fn load() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (CARD_TEMPLATE, include_str!("../../templates/card.html")),
        (PAGE_TEMPLATE, include_str!("../../templates/page.html")),
    ])?;
    Ok(tera)
}

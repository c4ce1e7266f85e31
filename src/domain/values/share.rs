use crate::domain::entities::deal::Deal;
use crate::domain::values::moderation::fold_accents;

pub const DEFAULT_SITE_URL: &str = "https://www.pechintech.com.br";
const MAX_SLUG_TITLE_LEN: usize = 100;

/// URL-safe slug from a title: accent-folded, lowercase, hyphen separated.
/// Falls back to `fallback` when nothing usable is left.
pub fn slugify(title: &str, fallback: &str) -> String {
    let folded = fold_accents(title);
    let words: Vec<String> = folded
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|w| w.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect();
    let mut slug = words.join("-");
    if slug.len() > MAX_SLUG_TITLE_LEN {
        slug.truncate(MAX_SLUG_TITLE_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Slug used in product URLs: the title slug plus the first 8 id characters.
pub fn product_slug(id: &str, title: &str) -> String {
    let short_id: String = id.chars().filter(|c| *c != '-').take(8).collect();
    format!("{}-{}", slugify(title, "produto"), short_id)
}

pub fn product_url(site_url: &str, deal: &Deal) -> String {
    format!(
        "{}/produto/{}",
        site_url.trim_end_matches('/'),
        product_slug(&deal.id, &deal.title)
    )
}

/// WhatsApp-style message announcing a deal.
pub fn share_message(site_url: &str, deal: &Deal) -> String {
    let mut message = String::from("🔥 *PROMOÇÃO IMPERDÍVEL!* 🔥\n\n");
    message.push_str(&format!("*{}*\n\n", deal.title));
    message.push_str(&format!("💰 De ~R$ {:.2}~ por apenas:\n", deal.original_price));
    match deal.discount() {
        Some(d) if d.is_displayable() => {
            message.push_str(&format!("✅ *R$ {:.2}* (-{}%)\n\n", deal.current_price, d.percent))
        }
        _ => message.push_str(&format!("✅ *R$ {:.2}*\n\n", deal.current_price)),
    }
    message.push_str(&format!("🏪 Loja: {}\n", deal.store));
    if let Some(coupon) = deal.coupon_code.as_deref().filter(|c| !c.trim().is_empty()) {
        message.push_str(&format!("🎫 Cupom: *{coupon}*\n"));
    }
    message.push_str(&format!("\n🔗 Confira: {}\n\n", product_url(site_url, deal)));
    message.push_str("_Encontrado no PechinTech - As melhores promoções de tecnologia!_");
    message
}

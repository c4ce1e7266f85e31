use reqwest::Url;

/// Retailers whose affiliate links are opened without a warning.
pub const ALLOWED_AFFILIATE_DOMAINS: &[&str] = &[
    "amazon.com.br",
    "amazon.com",
    "kabum.com.br",
    "magazineluiza.com.br",
    "americanas.com.br",
    "submarino.com.br",
    "shoptime.com.br",
    "mercadolivre.com.br",
    "terabyteshop.com.br",
    "pichau.com.br",
    "casasbahia.com.br",
    "extra.com.br",
    "pontofrio.com.br",
];

/// Parse an outbound link, accepting only http(s).
pub fn parse_outbound_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Whether `raw` is an http(s) link to a known retailer or one of its subdomains.
pub fn is_allowed_affiliate_url(raw: &str) -> bool {
    let Some(url) = parse_outbound_url(raw) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_lowercase();
    ALLOWED_AFFILIATE_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_retailers() {
        assert!(is_allowed_affiliate_url("https://www.kabum.com.br/produto/123"));
        assert!(is_allowed_affiliate_url("https://amazon.com.br/dp/B0"));
        assert!(is_allowed_affiliate_url("http://produto.mercadolivre.com.br/MLB-1"));
    }

    #[test]
    fn test_rejects_lookalikes_and_schemes() {
        assert!(!is_allowed_affiliate_url("https://kabum.com.br.evil.io/x"));
        assert!(!is_allowed_affiliate_url("https://notkabum.com.br/x"));
        assert!(!is_allowed_affiliate_url("javascript:alert(1)"));
        assert!(!is_allowed_affiliate_url("ftp://amazon.com/file"));
        assert!(!is_allowed_affiliate_url(""));
    }

    #[test]
    fn test_parse_outbound_url() {
        assert!(parse_outbound_url("https://example.com/x").is_some());
        assert!(parse_outbound_url("data:text/html,hi").is_none());
    }
}

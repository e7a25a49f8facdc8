//! Links into the Observatory of Economic Complexity.

use crate::country::Country;
use crate::game::TargetPair;

pub const TRADLE_URL: &str = "https://oec.world/en/tradle";
pub const TRADE_YEAR: u16 = 2021;

/// Tree-map of goods exported from the first target to the second.
pub fn trade_embed_url(targets: TargetPair) -> String {
    trade_embed_url_for_codes(targets.from.iso3, targets.to.iso3)
}

/// Same embed, from raw alpha-3 codes.
pub fn trade_embed_url_for_codes(from_iso3: &str, to_iso3: &str) -> String {
    format!(
        "https://oec.world/en/visualize/embed/tree_map/hs92/export/{}/{}/show/{TRADE_YEAR}/?controls=false&title=false&click=false",
        from_iso3.to_ascii_lowercase(),
        to_iso3.to_ascii_lowercase(),
    )
}

pub fn country_profile_url(country: &Country) -> String {
    format!(
        "https://oec.world/en/profile/country/{}",
        country.iso3.to_ascii_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::find_by_code;

    #[test]
    fn embed_url_uses_lowercase_alpha3() {
        let targets = TargetPair::new(
            find_by_code("fr").expect("france"),
            find_by_code("de").expect("germany"),
        )
        .expect("distinct");
        assert_eq!(
            trade_embed_url(targets),
            "https://oec.world/en/visualize/embed/tree_map/hs92/export/fra/deu/show/2021/?controls=false&title=false&click=false"
        );
        assert_eq!(trade_embed_url(targets), trade_embed_url_for_codes("FRA", "DEU"));
    }

    #[test]
    fn profile_link() {
        let japan = find_by_code("JP").expect("japan");
        assert_eq!(
            country_profile_url(japan),
            "https://oec.world/en/profile/country/jpn"
        );
    }
}

pub mod footer;
pub mod lodge_card;
pub mod season_hero;
pub mod seasonal_banner;

use yew::Classes;

/// Combine fixed base classes with caller-supplied extras.
#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mt-4");
        let rendered = class_list(&["lodge-card", "shadow"], &extra).to_string();
        assert!(rendered.contains("lodge-card"));
        assert!(rendered.contains("shadow"));
        assert!(rendered.contains("mt-4"));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Word pairs — static data
// Each pair is related but distinct. Which side goes to the civilians is
// decided per game, so the column order carries no meaning.
// ═══════════════════════════════════════════════════════════════════════

pub type WordPair = (&'static str, &'static str);

pub const WORD_PAIRS: &[WordPair] = &[
    // Food & drink
    ("Coffee", "Tea"),
    ("Pizza", "Burger"),
    ("Butter", "Margarine"),
    ("Honey", "Jam"),
    ("Wine", "Beer"),
    ("Pancake", "Waffle"),
    ("Sushi", "Sashimi"),
    ("Ice Cream", "Frozen Yogurt"),
    ("Croissant", "Baguette"),
    ("Ketchup", "Mustard"),
    ("Lemon", "Lime"),
    ("Chocolate", "Caramel"),
    // Animals
    ("Cat", "Dog"),
    ("Lion", "Tiger"),
    ("Dolphin", "Shark"),
    ("Crocodile", "Alligator"),
    ("Rabbit", "Hamster"),
    ("Owl", "Eagle"),
    ("Butterfly", "Moth"),
    ("Horse", "Donkey"),
    // Places
    ("Beach", "Desert"),
    ("Library", "Bookstore"),
    ("Hospital", "Pharmacy"),
    ("Airport", "Train Station"),
    ("Cinema", "Theater"),
    ("Mountain", "Volcano"),
    ("Castle", "Palace"),
    ("Zoo", "Aquarium"),
    // Objects
    ("Pen", "Pencil"),
    ("Guitar", "Violin"),
    ("Sofa", "Armchair"),
    ("Watch", "Bracelet"),
    ("Umbrella", "Raincoat"),
    ("Candle", "Lamp"),
    ("Mirror", "Window"),
    ("Laptop", "Tablet"),
    ("Backpack", "Suitcase"),
    ("Sock", "Glove"),
    // Activities & people
    ("Soccer", "Rugby"),
    ("Skiing", "Snowboarding"),
    ("Swimming", "Diving"),
    ("Chess", "Checkers"),
    ("Doctor", "Nurse"),
    ("Teacher", "Professor"),
    ("Wizard", "Witch"),
    ("Pirate", "Viking"),
    ("Birthday", "Anniversary"),
    ("Wedding", "Engagement"),
];

/// Every word that appears in the table, in table order.
pub fn all_words() -> impl Iterator<Item = &'static str> {
    WORD_PAIRS.iter().flat_map(|&(a, b)| [a, b])
}

/// The other word of the pair containing `word` (case-insensitive).
pub fn partner_of(word: &str) -> Option<&'static str> {
    let needle = word.trim();
    WORD_PAIRS.iter().find_map(|&(a, b)| {
        if a.eq_ignore_ascii_case(needle) {
            Some(b)
        } else if b.eq_ignore_ascii_case(needle) {
            Some(a)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pairs_are_distinct() {
        for &(a, b) in WORD_PAIRS {
            assert!(!a.eq_ignore_ascii_case(b), "pair {:?}/{:?} must differ", a, b);
        }
    }

    #[test]
    fn test_no_word_appears_twice() {
        let mut seen = HashSet::new();
        for w in all_words() {
            assert!(seen.insert(w.to_lowercase()), "{:?} appears in more than one pair", w);
        }
    }

    #[test]
    fn test_partner_lookup() {
        assert_eq!(partner_of("Coffee"), Some("Tea"));
        assert_eq!(partner_of("  tea "), Some("Coffee"));
        assert_eq!(partner_of("Spaceship"), None);
    }
}

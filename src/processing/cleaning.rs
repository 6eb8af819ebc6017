// Script-aware cleanup of recognized text. Each field keeps only the
// characters its class allows.

/// Character class a field is allowed to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    LatinName,
    LatinPlace,
    Arabic,
    IdCode,
    Date,
}

impl FieldClass {
    pub fn allows(&self, c: char) -> bool {
        match self {
            FieldClass::LatinName | FieldClass::LatinPlace => {
                c.is_ascii_alphabetic() || c.is_whitespace()
            }
            FieldClass::Arabic => is_arabic(c) || c.is_whitespace(),
            FieldClass::IdCode => c.is_ascii_alphanumeric(),
            FieldClass::Date => c.is_ascii_digit() || matches!(c, '.' | '/' | '-'),
        }
    }
}

/// Arabic Unicode block, U+0600..U+06FF.
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Drops every character outside `class` and trims the result.
/// Cleaning clean text returns it unchanged.
pub fn clean_text(text: &str, class: FieldClass) -> String {
    text.trim()
        .chars()
        .filter(|&c| class.allows(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLASSES: [FieldClass; 5] = [
        FieldClass::LatinName,
        FieldClass::LatinPlace,
        FieldClass::Arabic,
        FieldClass::IdCode,
        FieldClass::Date,
    ];

    #[test]
    fn test_card_id_cleanup() {
        assert_eq!(clean_text("A B-12 34!56", FieldClass::IdCode), "AB123456");
    }

    #[test]
    fn test_latin_name_drops_digits_and_accents() {
        assert_eq!(clean_text("  BEN4LI|\n", FieldClass::LatinName), "BENLI");
        assert_eq!(clean_text("Fès 2", FieldClass::LatinPlace), "Fs");
    }

    #[test]
    fn test_arabic_keeps_arabic_block() {
        assert_eq!(clean_text("يوسف YOUSSEF 12", FieldClass::Arabic), "يوسف");
        assert_eq!(clean_text("بن علي", FieldClass::Arabic), "بن علي");
    }

    #[test]
    fn test_date_keeps_separators() {
        assert_eq!(clean_text(" 12.05.1990 ~", FieldClass::Date), "12.05.1990");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let samples = [
            "A B-12 34!56",
            "  né à Casablanca  ",
            "مدير عام الأمن الوطني 2020",
            "\t01.01.2030 Valable\n",
            " x y ",
            "",
            "ÀÉÎ  ,;  z",
        ];
        for class in ALL_CLASSES {
            for sample in samples {
                let once = clean_text(sample, class);
                assert_eq!(clean_text(&once, class), once, "{:?} on {:?}", class, sample);
            }
        }
    }

    #[test]
    fn test_cleaned_text_stays_in_class() {
        for class in ALL_CLASSES {
            let cleaned = clean_text("Ab 1-2./ يوسف é!", class);
            assert!(cleaned.chars().all(|c| class.allows(c)));
        }
    }
}

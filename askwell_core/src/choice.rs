//! Menu choices and how a selected option is turned into an answer.

use crate::{
    answer::{Answer, ReturnType},
    Error, Result,
};

/// Options shown when the caller does not provide any.
pub const DEFAULT_CHOICES: [&str; 3] = ["A.", "B.", "C."];

/// A char based slice `[start, end)` taken from the selected option.
///
/// Out of range positions clamp to the option length, so extraction never
/// fails. The default keeps the first character only: selecting `"Delete"`
/// yields `"D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extract {
    pub start: usize,
    pub end: Option<usize>,
}

impl Default for Extract {
    fn default() -> Self {
        Self::first_char()
    }
}

impl Extract {
    #[must_use]
    pub const fn first_char() -> Self {
        Self {
            start: 0,
            end: Some(1),
        }
    }

    /// Keep the whole option.
    #[must_use]
    pub const fn whole() -> Self {
        Self {
            start: 0,
            end: None,
        }
    }

    #[must_use]
    pub const fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Everything from `start` to the end of the option.
    #[must_use]
    pub const fn starting_at(start: usize) -> Self {
        Self { start, end: None }
    }

    #[must_use]
    pub fn apply(&self, option: &str) -> String {
        let take = self
            .end
            .map_or(usize::MAX, |end| end.saturating_sub(self.start));
        option.chars().skip(self.start).take(take).collect()
    }

    /// Extract from `option` and convert to `return_type`.
    ///
    /// # Errors
    /// when the extracted text is not a valid `return_type`
    pub fn answer(&self, option: &str, return_type: ReturnType) -> Result<Answer> {
        Answer::convert(&self.apply(option), return_type)
    }
}

/// Resolve the options for a menu.
///
/// `None` means "use [`DEFAULT_CHOICES`]"; an explicit empty list is a
/// configuration error.
///
/// # Errors
/// when `choices` is an empty list
pub fn resolve_choices(choices: Option<Vec<String>>) -> Result<Vec<String>> {
    match choices {
        None => Ok(DEFAULT_CHOICES.iter().map(ToString::to_string).collect()),
        Some(list) if list.is_empty() => Err(Error::EmptyChoices),
        Some(list) => Ok(list),
    }
}

/// Make sure every option can produce a `return_type` answer before the
/// menu is shown.
///
/// # Errors
/// with the first option whose extracted text does not convert
pub fn check_choices(choices: &[String], extract: &Extract, return_type: ReturnType) -> Result<()> {
    for choice in choices {
        extract.answer(choice, return_type)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Extract::first_char(), "Delete", "D")]
    #[case(Extract::default(), "A.", "A")]
    #[case(Extract::whole(), "Create file", "Create file")]
    #[case(Extract::range(0, 2), "12. Hard", "12")]
    #[case(Extract::starting_at(3), "1. Easy", "Easy")]
    #[case(Extract::range(5, 50), "short", "")]
    #[case(Extract::first_char(), "", "")]
    #[case(Extract::first_char(), "Ñandú", "Ñ")]
    #[case(Extract::range(3, 1), "abcdef", "")]
    fn extract_slices(#[case] extract: Extract, #[case] option: &str, #[case] expected: &str) {
        assert_eq!(extract.apply(option), expected);
    }

    #[test]
    fn resolve_default_choices() {
        assert_eq!(
            resolve_choices(None).expect("defaults"),
            vec!["A.", "B.", "C."]
        );
        assert!(matches!(
            resolve_choices(Some(vec![])),
            Err(Error::EmptyChoices)
        ));
    }

    #[test]
    fn check_choices_converts_every_option() {
        let numbered: Vec<String> = vec!["1. Easy".into(), "2. Medium".into(), "3. Hard".into()];
        assert!(check_choices(&numbered, &Extract::first_char(), ReturnType::Integer).is_ok());

        let words: Vec<String> = vec!["1. Easy".into(), "Back".into()];
        assert!(matches!(
            check_choices(&words, &Extract::first_char(), ReturnType::Integer),
            Err(Error::Conversion { .. })
        ));
    }

    #[test]
    fn answer_from_selected_option() {
        assert_eq!(
            Extract::first_char()
                .answer("3. Hard", ReturnType::Integer)
                .expect("converts"),
            Answer::Integer(3)
        );
    }
}

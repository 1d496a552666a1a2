//! Disambiguates the overloaded text fields of a route step.
//!
//! The service packs road names, route reference codes and destination
//! signage into a handful of strings. Older responses embed the reference
//! code as a parenthetical at the end of the name, newer ones carry it
//! separately but still repeat it inside the name.

use itertools::Itertools;


/// Matches a reference code trailing a name, as in `Main Street (CA 1)`.
pub const REF_SUFFIX_PATTERN: &str = r"\(.+?\)$";

/// Separates the destination codes from the destination names.
pub const DESTINATION_SEPARATOR: &str = ": ";

/// The structured description of a road, parsed from its raw text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Road {
    pub names: Option<Vec<String>>,
    pub codes: Option<Vec<String>>,
    pub exit_codes: Option<Vec<String>>,
    pub destinations: Option<Vec<String>>,
    pub destination_codes: Option<Vec<String>>,
    pub rotary_names: Option<Vec<String>>,
}

impl Road {
    /// Parses the raw fields of a step. This never fails, absent or blank
    /// inputs simply produce absent fields.
    pub fn parse(
        name: &str,
        reference: Option<&str>,
        exits: Option<&str>,
        destination: Option<&str>,
        rotary_name: Option<&str>,
    ) -> Self {
        let (names, codes) = Self::parse_names(name, reference);
        let (destination_codes, destinations) = match destination {
            Some(destination) => Self::parse_destination(destination),
            None => (None, None),
        };

        Road {
            names,
            codes,
            exit_codes: exits.and_then(|exits| tag_values(exits, ';')),
            destinations,
            destination_codes,
            rotary_names: rotary_name.and_then(|rotary| tag_values(rotary, ';')),
        }
    }

    fn parse_names(
        name: &str,
        reference: Option<&str>,
    ) -> (Option<Vec<String>>, Option<Vec<String>>) {
        if let (false, Some(reference)) = (name.is_empty(), reference) {
            let names = if name == reference {
                None
            } else {
                tag_values(&name.replace(&format!("({reference})"), ""), ';')
            };

            return (names, tag_values(reference, ';'));
        }

        if let Some(parenthetical) = Self::reference_suffix(name) {
            let names = if Some(name) == reference {
                None
            } else {
                tag_values(&name.replace(parenthetical, ""), ';')
            };

            let codes = parenthetical.trim_matches(|c| c == '(' || c == ')');
            return (names, tag_values(codes, ';'));
        }

        (
            tag_values(name, ';'),
            reference.and_then(|reference| tag_values(reference, ';')),
        )
    }

    /// The trailing parenthetical of `name`, parentheses included.
    fn reference_suffix(name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }

        let re = regex::Regex::new(REF_SUFFIX_PATTERN).ok()?;
        re.find(name).map(|found| found.as_str())
    }

    fn parse_destination(destination: &str) -> (Option<Vec<String>>, Option<Vec<String>>) {
        match destination.split_once(DESTINATION_SEPARATOR) {
            Some((codes, descriptions)) => {
                // Only the first separator splits, later ones belong to the names.
                (tag_values(codes, ','), tag_values(descriptions, ','))
            }
            None => (None, tag_values(destination, ',')),
        }
    }

    /// The `destinations` wire string for the given codes and names.
    pub fn destination_description(
        codes: Option<&[String]>,
        destinations: Option<&[String]>,
    ) -> Option<String> {
        match (codes, destinations) {
            (Some(codes), Some(destinations)) => Some(format!(
                "{}{DESTINATION_SEPARATOR}{}",
                codes.join(", "),
                destinations.join(", ")
            )),
            // A trailing separator keeps lone codes apart from names.
            (Some(codes), None) => {
                Some(format!("{}{DESTINATION_SEPARATOR}", codes.join(", ")))
            }
            (None, Some(destinations)) => Some(destinations.join(", ")),
            (None, None) => None,
        }
    }

    /// Joins `;`-separated values back into their wire string.
    pub fn join_values(values: Option<&[String]>) -> Option<String> {
        values.map(|values| values.iter().join("; "))
    }
}

/// Splits `value` on `separator`, trimming whitespace and dropping blanks.
/// A split which leaves nothing yields `None`.
pub fn tag_values(value: &str, separator: char) -> Option<Vec<String>> {
    let values = value
        .split(separator)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();

    (!values.is_empty()).then_some(values)
}

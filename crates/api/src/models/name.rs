use smol_str::SmolStr;

/// Simple (unqualified) identifier of a declaration.
pub type Name = SmolStr;

/// Name of the operator function behind call sugar on callable values.
pub const INVOKE: &str = "invoke";

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

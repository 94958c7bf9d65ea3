//! Variable Mapping
//!
//! bash variable references map to PowerShell equivalents. Well-known UNIX
//! environment variables translate to their Windows counterparts; special
//! single-character variables map to distinct PowerShell expressions; all
//! other names become `$env:` lookups.

/// Standalone form: the expression used when the variable is a whole word
/// or concatenated outside a double-quoted string.
pub fn map_variable(name: &str, braced: bool) -> String {
    match name {
        "HOME" => "$env:USERPROFILE".to_string(),
        "USER" => "$env:USERNAME".to_string(),
        "SHELL" => "$env:ComSpec".to_string(),
        "TMPDIR" => "$env:TEMP".to_string(),
        "HOSTNAME" => "$env:COMPUTERNAME".to_string(),
        "PWD" => "$PWD".to_string(),
        "OLDPWD" => "$OLDPWD".to_string(),
        "RANDOM" => "(Get-Random)".to_string(),
        "?" => "$LASTEXITCODE".to_string(),
        "$" | "!" => "$PID".to_string(),
        "#" => "$args.Count".to_string(),
        "@" => "$args".to_string(),
        "0" => "$MyInvocation.MyCommand.Name".to_string(),
        n if n.len() == 1 && n.as_bytes()[0].is_ascii_digit() => {
            format!("$args[{}]", n.parse::<usize>().unwrap_or(1) - 1)
        }
        _ if braced => format!("${{env:{}}}", name),
        _ => format!("$env:{}", name),
    }
}

/// Interpolated form: the text used inside a PowerShell double-quoted
/// string. Expressions PowerShell cannot expand there (indexing, property
/// access, cmdlet calls) are wrapped in `$(…)`.
pub fn map_variable_interpolated(name: &str, braced: bool) -> String {
    match name {
        "RANDOM" => "$(Get-Random)".to_string(),
        "#" => "$($args.Count)".to_string(),
        "0" => "$($MyInvocation.MyCommand.Name)".to_string(),
        n if n.len() == 1 && n.as_bytes()[0].is_ascii_digit() && n != "0" => {
            format!("$($args[{}])", n.parse::<usize>().unwrap_or(1) - 1)
        }
        _ => map_variable(name, braced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_names() {
        assert_eq!(map_variable("HOME", false), "$env:USERPROFILE");
        assert_eq!(map_variable("USER", false), "$env:USERNAME");
        assert_eq!(map_variable("TMPDIR", false), "$env:TEMP");
        assert_eq!(map_variable("HOSTNAME", false), "$env:COMPUTERNAME");
    }

    #[test]
    fn test_special_variables() {
        assert_eq!(map_variable("?", false), "$LASTEXITCODE");
        assert_eq!(map_variable("$", false), "$PID");
        assert_eq!(map_variable("!", false), "$PID");
        assert_eq!(map_variable("#", false), "$args.Count");
        assert_eq!(map_variable("@", false), "$args");
        assert_eq!(map_variable("0", false), "$MyInvocation.MyCommand.Name");
        assert_eq!(map_variable("3", false), "$args[2]");
    }

    #[test]
    fn test_plain_names_use_env() {
        assert_eq!(map_variable("FOO", false), "$env:FOO");
        assert_eq!(map_variable("FOO", true), "${env:FOO}");
    }

    #[test]
    fn test_interpolated_wrapping() {
        assert_eq!(map_variable_interpolated("RANDOM", false), "$(Get-Random)");
        assert_eq!(map_variable_interpolated("2", false), "$($args[1])");
        assert_eq!(map_variable_interpolated("HOME", false), "$env:USERPROFILE");
    }
}

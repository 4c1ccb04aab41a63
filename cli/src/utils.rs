/// Long options that take a value; Go's `flag` package accepts them with one dash.
const LONG_FLAGS_WITH_VALUE: [&str; 3] = ["name", "filter", "go-bin"];

/// Rewrites single-dash long options (`-name x`, `-filter=x`) into the
/// `--name` form clap expects. Stops at the first positional argument or `--`;
/// everything from there on is left untouched for the wrapped command.
pub fn normalize_go_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let mut out: Vec<String> = iter.next().into_iter().collect();

    while let Some(arg) = iter.next() {
        if arg == "--" || arg == "-" || !arg.starts_with('-') {
            out.push(arg);
            break;
        }

        let long = arg.trim_start_matches('-');
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        if !LONG_FLAGS_WITH_VALUE.contains(&name) {
            out.push(arg);
            continue;
        }

        out.push(format!("--{long}"));
        if !inline_value {
            if let Some(value) = iter.next() {
                out.push(value);
            }
        }
    }

    out.extend(iter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn norm(args: &[&str]) -> Vec<String> {
        normalize_go_flags(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn rewrites_single_dash_long_flags() {
        assert_eq!(
            norm(&["nolog", "-name", "x.log", "-filter=Suite", "-c"]),
            vec!["nolog", "--name", "x.log", "--filter=Suite", "-c"]
        );
    }

    #[test]
    fn flag_values_are_not_mistaken_for_positionals() {
        assert_eq!(
            norm(&["nolog", "-filter", "TestX", "-f", "./..."]),
            vec!["nolog", "--filter", "TestX", "-f", "./..."]
        );
    }

    #[test]
    fn leaves_passthrough_untouched() {
        assert_eq!(
            norm(&["nolog", "./pkg", "-name", "x"]),
            vec!["nolog", "./pkg", "-name", "x"]
        );
        assert_eq!(
            norm(&["nolog", "--", "-filter", "x"]),
            vec!["nolog", "--", "-filter", "x"]
        );
    }

    #[test]
    fn double_dash_long_flags_are_kept() {
        assert_eq!(
            norm(&["nolog", "--go-bin", "/opt/go/bin/go"]),
            vec!["nolog", "--go-bin", "/opt/go/bin/go"]
        );
    }
}

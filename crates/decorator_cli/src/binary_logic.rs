use crate::args::DecorateCli;
use anyhow::Context;
use log::info;
use number_decorator::{inner::double, traits::Function, Decorator};
use std::io::{self, Write};

pub fn run(opt: DecorateCli) -> anyhow::Result<()> {
    // Init logging.
    simple_logger::init_with_level(opt.log_opt.log_level)?;

    let stdout = io::stdout();
    render_all(&opt.tokens, &mut stdout.lock()).context("Writing to stdout.")
}

/// Writes one `token -> word` line per token, using the doubling decorator.
pub fn render_all<W: Write>(tokens: &[String], out: &mut W) -> io::Result<()> {
    let decorator = Decorator::new(double);
    for token in tokens {
        let word = decorator.map(token.clone());
        if word.is_empty() {
            info!("'{token}' has no doubled spelling");
        }
        writeln!(out, "{token} -> {word}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assert_eq, proptest};

    fn rendered(tokens: &[&str]) -> String {
        let tokens = tokens.iter().map(|&x| x.to_owned()).collect::<Vec<_>>();
        let mut out = Vec::new();
        render_all(&tokens, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_line_per_token() {
        assert_eq!(
            rendered(&["2", "6", "not-a-number", "+5"]),
            "2 -> four\n6 -> \nnot-a-number -> \n+5 -> ten\n"
        );
    }

    #[test]
    fn no_tokens_no_output() {
        assert_eq!(rendered(&[]), "");
    }

    proptest! {
        #[test]
        fn line_count_matches(tokens in proptest::collection::vec("[0-9a-z+-]{0,4}", 0..8)) {
            let tokens = tokens.iter().map(String::as_str).collect::<Vec<_>>();
            prop_assert_eq!(rendered(&tokens).lines().count(), tokens.len());
        }
    }
}

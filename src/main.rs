use clap::Parser;

use gallifreyan::config::RenderOptions;
use gallifreyan::engine::pipeline::{GlyphEngine, RenderError};

/// Renders a circular-script glyph wheel for the given text or number and
/// writes it as a PNG.
#[derive(Parser)]
#[command(name = "gallifreyan", version, about)]
struct Cli {
    /// Words to render; multiple words are joined with spaces. A value
    /// made only of digits renders as a numeral ring.
    #[arg(required = true)]
    value: Vec<String>,

    /// Base diameter of the largest circle in pixels.
    #[arg(long)]
    size: Option<String>,

    /// Stroke width in pixels.
    #[arg(long)]
    width: Option<String>,

    /// Stroke color as R,G,B[,A] byte values.
    #[arg(long)]
    color: Option<String>,

    /// Rotation of the entire image in radians.
    #[arg(long)]
    angle: Option<String>,

    /// Output path. Defaults to "<value>.png".
    #[arg(long)]
    out: Option<String>,

    /// Always treat the value as a digit string; fail on anything else.
    #[arg(long)]
    digits: bool,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RenderError> {
    let value = cli.value.join(" ");

    // Each option falls back to its default on a parse failure; one bad
    // field never blocks the others.
    let mut options = RenderOptions::default();
    if let Some(raw) = &cli.size {
        options.set_size(raw);
    }
    if let Some(raw) = &cli.width {
        options.set_thickness(raw);
    }
    if let Some(raw) = &cli.color {
        options.set_color(raw);
    }
    if let Some(raw) = &cli.angle {
        options.set_angle(raw);
    }

    let engine = GlyphEngine::new(options);
    let image = if cli.digits {
        engine.render_numerals(&value)?
    } else {
        engine.render(&value)
    };

    let out_path = output_path(cli.out.as_deref(), &value);
    image.save(&out_path)?;
    log::info!("wrote {out_path}");
    println!("{out_path}");
    Ok(())
}

/// Resolve the output path: explicit `--out` or `<value>.png`, with
/// filename-hostile characters stripped and the extension enforced.
fn output_path(out: Option<&str>, value: &str) -> String {
    let mut path = match out {
        Some(p) => p.to_string(),
        None => format!("{value}.png"),
    };
    path.retain(|c| !matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*' | '\u{0}'..='\u{1f}'));
    if !path.to_ascii_lowercase().ends_with(".png") {
        path.push_str(".png");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_from_value() {
        assert_eq!(output_path(None, "hello world"), "hello world.png");
    }

    #[test]
    fn extension_is_enforced() {
        assert_eq!(output_path(Some("wheel"), "x"), "wheel.png");
        assert_eq!(output_path(Some("wheel.PNG"), "x"), "wheel.PNG");
    }

    #[test]
    fn hostile_characters_are_stripped() {
        assert_eq!(output_path(None, "what?no:\"quotes\""), "whatnoquotes.png");
    }
}

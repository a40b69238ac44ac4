use crate::commands::ConvertCmd;
use canvas_geojson::extra::parser::{ParseError, PathParser};
use canvas_geojson::path::{ContextError, GeoJsonContext};
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid value {value:?} for --{name}.")]
    Argument { name: &'static str, value: String },
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Concatenates the path given on the command line and the contents of the input
/// file, separated by a space so that the last number of one does not run into the
/// first token of the other.
pub fn read_input<R: Read>(path: Option<&str>, file: Option<R>) -> io::Result<String> {
    let mut input = path.unwrap_or("").to_string();
    if let Some(mut file) = file {
        if !input.is_empty() {
            input.push(' ');
        }
        file.read_to_string(&mut input)?;
    }

    Ok(input)
}

pub fn convert(mut cmd: ConvertCmd) -> Result<(), ConvertError> {
    let mut context =
        GeoJsonContext::with_options(cmd.scale, cmd.options)?.with_rect_mode(cmd.rect_mode);

    PathParser::new().parse_str(&cmd.input, &mut context)?;

    log::info!(
        "{} sub-paths recorded at scale {}",
        context.subpath_count(),
        context.scale()
    );

    let geometry = context.result();
    if cmd.pretty {
        serde_json::to_writer_pretty(&mut *cmd.output, &geometry)?;
    } else {
        serde_json::to_writer(&mut *cmd.output, &geometry)?;
    }
    writeln!(&mut *cmd.output)?;

    Ok(())
}

#[test]
fn path_and_file_are_separated() {
    let file: &[u8] = b"1 1 L 2 2";
    let input = read_input(Some("M 0 0"), Some(file)).unwrap();
    assert_eq!(input, "M 0 0 1 1 L 2 2");

    let input = read_input(None, Some(file)).unwrap();
    assert_eq!(input, "1 1 L 2 2");

    let input = read_input::<&[u8]>(Some("M 0 0"), None).unwrap();
    assert_eq!(input, "M 0 0");
}

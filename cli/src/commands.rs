use canvas_geojson::geom::FlatteningOptions;
use canvas_geojson::path::RectMode;
use std::io;

pub struct ConvertCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub scale: f64,
    pub options: FlatteningOptions<f64>,
    pub rect_mode: RectMode,
    pub pretty: bool,
}

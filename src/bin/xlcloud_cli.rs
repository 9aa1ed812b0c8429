//! CLI tool for xlcloud - reads a word list and reports what the browser
//! viewer would do with it
//!
//! Usage:
//!   xlcloud_cli <words.xlsx>                        # Catalog + renderer options
//!   xlcloud_cli <words.csv> --raster cloud.png      # ...plus recovered positions
//!   xlcloud_cli <words.xlsx> -o out.json            # Write JSON to file
//!
//! The PNG must be a capture of a cloud rendered from the same file, at the
//! canvas size the viewer used.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::env;
    use std::fs;
    use std::io::{self, Write};

    use serde::Serialize;
    use xlcloud::layout::RenderRequest;
    use xlcloud::raster::decode_png;
    use xlcloud::{CloudConfig, Session, Size, WordCatalog, WordPosition};

    /// Container assumed when no capture is given.
    const DEFAULT_CONTAINER: Size = Size {
        width: 840,
        height: 640,
    };

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Report<'a> {
        catalog: &'a WordCatalog,
        render: &'a RenderRequest,
        #[serde(skip_serializing_if = "Option::is_none")]
        positions: Option<&'a [WordPosition]>,
    }

    fn usage() -> ! {
        eprintln!("Usage: xlcloud_cli <input.xlsx|.csv|.tsv> [--raster capture.png] [-o output.json]");
        std::process::exit(1);
    }

    pub fn main() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args: Vec<String> = env::args().collect();
        if args.len() < 2 {
            usage();
        }

        let input_path = &args[1];
        let mut raster_path: Option<&String> = None;
        let mut output_path: Option<&String> = None;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--raster" if i + 1 < args.len() => {
                    raster_path = Some(&args[i + 1]);
                    i += 2;
                }
                "-o" if i + 1 < args.len() => {
                    output_path = Some(&args[i + 1]);
                    i += 2;
                }
                _ => usage(),
            }
        }

        // Read input file
        let data = match fs::read(input_path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error reading {}: {}", input_path, e);
                std::process::exit(1);
            }
        };

        let mut session = Session::new(CloudConfig::default());
        if let Err(e) = session.load_bytes(&data, input_path) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }

        // Decode the capture, if any
        let raster = raster_path.map(|path| {
            let bytes = fs::read(path).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            });
            decode_png(&bytes).unwrap_or_else(|e| {
                eprintln!("Error decoding {}: {}", path, e);
                std::process::exit(1);
            })
        });

        let padding = session.config().canvas_padding;
        let container = raster.as_ref().map_or(DEFAULT_CONTAINER, |r| {
            Size::new(
                r.width().saturating_add(padding),
                r.height().saturating_add(padding),
            )
        });
        let render = RenderRequest::build(session.catalog(), container, session.config());

        if let Some(raster) = &raster {
            session.ingest_raster(raster);
        }

        let report = Report {
            catalog: session.catalog(),
            render: &render,
            positions: raster.as_ref().map(|_| session.positions()),
        };

        // Serialize to JSON
        let json = match serde_json::to_string_pretty(&report) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error serializing JSON: {}", e);
                std::process::exit(1);
            }
        };

        // Output
        match output_path {
            Some(path) => {
                if let Err(e) = fs::write(path, &json) {
                    eprintln!("Error writing {}: {}", path, e);
                    std::process::exit(1);
                }
                eprintln!("Written: {}", path);
            }
            None => {
                io::stdout().write_all(json.as_bytes()).unwrap();
                println!();
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

use std::sync::OnceLock;

use rust_embed::RustEmbed;
use tracing::warn;

/// Stylesheet and icon, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let svg = load_text("favicon.svg");
            format!("data:image/svg+xml;base64,{}", encode_base64(svg.as_bytes()))
        })
        .as_str()
}

/// Missing or non-UTF-8 assets degrade to an empty string.
fn load_text(name: &str) -> String {
    let Some(file) = EmbeddedAssets::get(name) else {
        warn!(asset = name, "embedded asset missing");
        return String::new();
    };
    String::from_utf8(file.data.into_owned()).unwrap_or_else(|_| {
        warn!(asset = name, "embedded asset is not valid UTF-8");
        String::new()
    })
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let bytes = [chunk[0], *chunk.get(1).unwrap_or(&0), *chunk.get(2).unwrap_or(&0)];
        let packed = u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2]);
        for idx in 0..4 {
            if idx <= chunk.len() {
                let sextet = (packed >> (18 - 6 * idx)) & 0x3f;
                output.push(TABLE[sextet as usize] as char);
            } else {
                output.push('=');
            }
        }
    }
    output
}

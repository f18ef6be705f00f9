mod utils;

use wallet_barcode::{Bounds, Format, NoQr, Payload, RenderOptions, Renderer};

const BOUNDS: Bounds = Bounds::new(48, 48);

fn main() {
    utils::init_logging();

    // a 7x7 finder pattern unless a "width,height,hex" descriptor is given
    let descriptor = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "7,7,FF06EDDBB07F8".to_owned());

    let renderer = Renderer::new(BOUNDS, NoQr)
        .set_options(RenderOptions::new().set_quiet_zone(2));

    let frame = renderer.render_frame(Format::Pdf417, Payload::Text(descriptor.as_bytes()));
    utils::display_frame(&frame, BOUNDS);
}

mod utils;

use wallet_barcode::{Bounds, Format, NoQr, Payload, Renderer};

const BOUNDS: Bounds = Bounds::new(120, 40);

const CARDS: [(&str, Format, &str); 5] = [
    ("Starbucks", Format::Code128, "6035550123456789"),
    ("Target Circle", Format::Code128, "4012345678901"),
    ("Library Card", Format::Code39, "29857341"),
    ("Gym", Format::Aztec, "5,5,F8C63F1"),
    ("Demo Flight", Format::Qr, "M1DOE/JOHN E ABC123"),
];

fn main() {
    utils::init_logging();

    let renderer = Renderer::new(BOUNDS, NoQr);
    for (name, format, data) in CARDS {
        println!("{name} ({format})");
        let frame = renderer.render_frame(format, Payload::Text(data.as_bytes()));
        utils::display_frame(&frame, BOUNDS);
        println!();
    }
}

#![allow(dead_code)]

use wallet_barcode::{Bounds, Frame, RenderRect};

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Paints `rects` in order over a white surface.
pub fn rasterize(rects: &[RenderRect], bounds: Bounds) -> Vec<bool> {
    let (w, h) = (bounds.width as i32, bounds.height as i32);
    let mut pixels = vec![false; (w * h) as usize];
    for r in rects {
        for y in r.y.max(0)..(r.y + r.height as i32).min(h) {
            for x in r.x.max(0)..(r.x + r.width as i32).min(w) {
                pixels[(y * w + x) as usize] = r.is_black();
            }
        }
    }
    pixels
}

pub fn display_frame(frame: &Frame, bounds: Bounds) {
    let pixels = rasterize(&frame.rects, bounds);
    for row in pixels.chunks(bounds.width as usize) {
        for &on in row {
            print!("{}", if on { BLACK } else { WHITE });
        }
        println!();
    }
    print!("\x1B[0m");

    if let Some(error) = &frame.error {
        println!("[{error}]");
    }
}

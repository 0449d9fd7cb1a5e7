/// Sprite data, in page layout (see [`crate::screen`]).

use crate::screen::Bitmap;

pub const WITCH: Bitmap = Bitmap::new(8, 8, &[0x18, 0x3C, 0x7E, 0x7E, 0x3C, 0x5A, 0x18, 0x00]);

pub const SKELETON: Bitmap = Bitmap::new(8, 8, &[0x3C, 0x7E, 0xFF, 0xDB, 0xFF, 0x66, 0x3C, 0x3C]);

pub const POWERUP: Bitmap = Bitmap::new(8, 8, &[0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x7E, 0x3C, 0x18]);

pub const BOSS: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0x3C, 0x3C, 0x7E, 0x7E, 0xFF, 0xFF, 0xDB, 0xDB, //
        0xFF, 0xFF, 0x66, 0x66, 0x3C, 0x3C, 0x3C, 0x3C, //
        0x3C, 0x3C, 0x7E, 0x7E, 0xFF, 0xFF, 0xDB, 0xDB, //
        0xFF, 0xFF, 0x66, 0x66, 0x3C, 0x3C, 0x3C, 0x3C,
    ],
);

pub const BULLET: Bitmap = Bitmap::new(4, 4, &[0x06, 0x0F, 0x0F, 0x06]);

/// Drawn over the player while the barrier is up. Only the top page of
/// the 16x16 box carries artwork; the bottom page is blank.
pub const BARRIER: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0xFF, 0xFF, 0x81, 0xFF, 0xBD, 0xFF, 0xA1, 0xFF, //
        0xA1, 0xFF, 0xBD, 0xFF, 0x81, 0xFF, 0xFF, 0xFF, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

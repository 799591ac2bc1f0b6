//! Cuts the six cube faces out of a cross-layout skybox image.

use anyhow::Context;
use image::GenericImageView;
use std::path::Path;

/// One face of the cubemap, tagged with its cell in the 4x3 cross grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Bottom,
    ];

    /// (column, row) of this face in the horizontal-cross layout:
    /// the four side faces fill the middle row, top and bottom sit
    /// above and below the front face.
    pub fn cell(self) -> (u32, u32) {
        match self {
            Face::Top => (1, 0),
            Face::Left => (0, 1),
            Face::Front => (1, 1),
            Face::Right => (2, 1),
            Face::Back => (3, 1),
            Face::Bottom => (1, 2),
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            Face::Top => "top.png",
            Face::Left => "left.png",
            Face::Front => "front.png",
            Face::Right => "right.png",
            Face::Back => "back.png",
            Face::Bottom => "bottom.png",
        }
    }
}

/// Tile dimensions of a 4x3 cross grid. Truncates if the image does not
/// divide evenly, leaving the trailing pixel rows/columns unused.
pub fn tile_size(width: u32, height: u32) -> (u32, u32) {
    (width / 4, height / 3)
}

/// Writes the six face tiles of `image` into `output_dir` as
/// `top.png`, `left.png`, `front.png`, `right.png`, `back.png` and
/// `bottom.png`, overwriting any existing files of those names.
pub fn split(image: &image::DynamicImage, output_dir: &Path) -> anyhow::Result<()> {
    let (width, height) = image.dimensions();
    let (tile_width, tile_height) = tile_size(width, height);

    for face in Face::ALL {
        let (column, row) = face.cell();
        let tile = image.crop_imm(
            column * tile_width,
            row * tile_height,
            tile_width,
            tile_height,
        );

        let path = output_dir.join(face.filename());
        tile.save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

/// Opens the image at `input` and splits it into `output_dir`. A decode
/// failure aborts before anything is written.
pub fn split_file(input: &Path, output_dir: &Path) -> anyhow::Result<()> {
    let image =
        image::open(input).with_context(|| format!("failed to open {}", input.display()))?;

    split(&image, output_dir)
}

//! Color buffer upkeep
//!
//! `occupy` paints cells one at a time; a full repaint is only needed
//! when the palette changes.

use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// ABGR colors for the two cell states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub occupied: u32,
    pub empty: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            occupied: OCCUPIED_COLOR,
            empty: EMPTY_COLOR,
        }
    }
}

impl OccupancyGrid {
    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub(crate) fn set_palette(&mut self, palette: Palette) {
        if palette == self.palette {
            return;
        }
        self.palette = palette;
        self.refresh_colors();
    }

    /// Rebuild colors[] from cells[]
    /// Parallel fill with Rayon when feature enabled
    pub(crate) fn refresh_colors(&mut self) {
        let Palette { occupied, empty } = self.palette;

        #[cfg(feature = "parallel")]
        {
            self.colors
                .par_iter_mut()
                .zip(self.cells.par_iter())
                .for_each(|(color, &cell)| *color = if cell == 1 { occupied } else { empty });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (color, &cell) in self.colors.iter_mut().zip(self.cells.iter()) {
                *color = if cell == 1 { occupied } else { empty };
            }
        }
    }
}

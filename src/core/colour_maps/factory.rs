use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::colour_maps::grayscale::Grayscale;
use crate::core::colour_maps::hot::Hot;
use crate::core::colour_maps::kinds::ColourMapKind;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::Hot => Box::new(Hot::new(max_iterations)),
        ColourMapKind::Grayscale => Box::new(Grayscale::new(max_iterations)),
    }
}

//! The [`Biome`] value type: climate coordinates, optional override color,
//! gradient lookup and accumulation for neighborhood averaging.

use image::{Rgb, RgbaImage};

/// Fixed-point scale for climate values (micro-units).
///
/// Climate values are accumulated as integers so that summing `n` identical
/// samples and dividing by `n` reproduces the sample bit-exactly.
const CLIMATE_SCALE: f64 = 1_000_000.0;

const fn to_fixed(value: f64) -> i64 {
    if value >= 0.0 {
        (value * CLIMATE_SCALE + 0.5) as i64
    } else {
        (value * CLIMATE_SCALE - 0.5) as i64
    }
}

/// A biome with the data needed to tint biome-dependent blocks.
///
/// Equality compares the id and the climate coordinates only; the override
/// color does not take part.
#[derive(Clone, Copy, Debug)]
pub struct Biome {
    id: u8,
    temperature: i64,
    rainfall: i64,
    /// Override color for biomes the gradient does not capture (swampland).
    /// Stored wide so that accumulated sums do not overflow.
    extra: Option<[u32; 3]>,
}

impl Biome {
    /// Creates a biome without an override color.
    pub const fn new(id: u8, temperature: f64, rainfall: f64) -> Self {
        Self {
            id,
            temperature: to_fixed(temperature),
            rainfall: to_fixed(rainfall),
            extra: None,
        }
    }

    /// Creates a biome whose tint is the fixed color `(r, g, b)`.
    pub const fn with_extra_color(id: u8, temperature: f64, rainfall: f64, rgb: [u8; 3]) -> Self {
        Self {
            id,
            temperature: to_fixed(temperature),
            rainfall: to_fixed(rainfall),
            extra: Some([rgb[0] as u32, rgb[1] as u32, rgb[2] as u32]),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn temperature(&self) -> f64 {
        self.temperature as f64 / CLIMATE_SCALE
    }

    pub fn rainfall(&self) -> f64 {
        self.rainfall as f64 / CLIMATE_SCALE
    }

    /// Returns the override color, if one is set. Channels saturate at 255.
    pub fn extra_color(&self) -> Option<Rgb<u8>> {
        self.extra
            .map(|[r, g, b]| Rgb([r.min(255) as u8, g.min(255) as u8, b.min(255) as u8]))
    }

    /// Adds the climate coordinates and override color channels of `other`.
    ///
    /// A missing override color counts as zero; the sum has no override color
    /// only if neither operand has one.
    pub fn accumulate(&mut self, other: &Biome) {
        self.temperature += other.temperature;
        self.rainfall += other.rainfall;
        self.extra = match (self.extra, other.extra) {
            (None, None) => None,
            (a, b) => {
                let [ar, ag, ab] = a.unwrap_or([0; 3]);
                let [br, bg, bb] = b.unwrap_or([0; 3]);
                Some([ar + br, ag + bg, ab + bb])
            }
        };
    }

    /// Divides every accumulated channel by `n`. `n == 0` leaves the biome as is.
    pub fn average(&mut self, n: u32) {
        if n == 0 {
            return;
        }
        self.temperature /= n as i64;
        self.rainfall /= n as i64;
        if let Some([r, g, b]) = self.extra {
            self.extra = Some([r / n, g / n, b / n]);
        }
    }

    /// Averages a neighborhood of samples into one biome.
    ///
    /// Returns the first sample unchanged when every sample equals it. The id of
    /// the result is the id of the first sample. Returns `None` for an empty
    /// slice.
    pub fn smooth(samples: &[Biome]) -> Option<Biome> {
        let (first, rest) = samples.split_first()?;
        if rest.iter().all(|b| b == first) {
            return Some(*first);
        }
        let mut sum = *first;
        for biome in rest {
            sum.accumulate(biome);
        }
        sum.average(samples.len() as u32);
        Some(sum)
    }

    /// Looks up the tint color of this biome in a climate gradient.
    ///
    /// The override color wins when set. Otherwise temperature and rainfall are
    /// clamped to `[0, 1]`, rainfall is scaled by temperature, and the pixel at
    /// `(1 - temperature, 1 - rainfall)` (scaled to the image size) is returned.
    /// `flip_xy` selects the transposed layout some gradient textures use.
    pub fn get_color(&self, colors: &RgbaImage, flip_xy: bool) -> Rgb<u8> {
        if let Some(color) = self.extra_color() {
            return color;
        }
        if colors.width() == 0 || colors.height() == 0 {
            tracing::warn!("empty biome color gradient, using white");
            return Rgb([255, 255, 255]);
        }

        let temperature = self.temperature().clamp(0.0, 1.0);
        let rainfall = self.rainfall().clamp(0.0, 1.0) * temperature;

        let max_x = colors.width() - 1;
        let max_y = colors.height() - 1;
        let mut x = (max_x as f64 - max_x as f64 * temperature) as u32;
        let mut y = (max_y as f64 - max_y as f64 * rainfall) as u32;
        if flip_xy {
            (x, y) = (
                max_x - rescale(y, max_y, max_x),
                max_y - rescale(x, max_x, max_y),
            );
        }

        let [r, g, b, _] = colors.get_pixel(x.min(max_x), y.min(max_y)).0;
        Rgb([r, g, b])
    }
}

/// Maps a coordinate in `0..=from_max` onto `0..=to_max`.
fn rescale(value: u32, from_max: u32, to_max: u32) -> u32 {
    if from_max == to_max || from_max == 0 {
        return value.min(to_max);
    }
    (value as u64 * to_max as u64 / from_max as u64) as u32
}

impl PartialEq for Biome {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.temperature == other.temperature
            && self.rainfall == other.rainfall
    }
}

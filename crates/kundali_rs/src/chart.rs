//! Full chart assembly: positions, sidereal placements and houses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use kundali_core::{ALL_BODIES, Body, KeplerSolver, compute_positions_with};
use kundali_frames::{EclipticFrame, normalize_deg};
use kundali_time::CivilTime;
use kundali_vedic_base::{
    Bhava, BhavaSystem, ChartAngles, CuspSolver, GeoLocation, Rashi, ayanamsha_deg,
    house_cusps_with, nakshatra_from_longitude, planet_house_number, rashi_from_longitude,
};

use crate::birth::BirthData;
use crate::config::ChartConfig;
use crate::error::KundaliError;

/// Where one body falls in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub body: Body,
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: Option<f64>,
    pub rashi: Rashi,
    /// 0-based sign index (0 = Mesha).
    pub rashi_index: u8,
    pub degrees_in_rashi: f64,
    /// 0-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada 1..=4.
    pub pada: u8,
    /// House 1..=12 on the sidereal cusps.
    pub house: u8,
    pub is_retrograde: bool,
}

/// Placement of a chart angle (Lagna or MC).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnglePlacement {
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub nakshatra_index: u8,
    pub pada: u8,
}

impl AnglePlacement {
    fn new(tropical_deg: f64, sidereal_deg: f64) -> Self {
        let rashi = rashi_from_longitude(sidereal_deg);
        let nakshatra = nakshatra_from_longitude(sidereal_deg);
        Self {
            tropical_deg,
            sidereal_deg,
            rashi: rashi.rashi,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra_index: nakshatra.nakshatra_index,
            pada: nakshatra.pada,
        }
    }
}

/// A computed birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub birth: BirthData,
    pub config: ChartConfig,
    /// Julian Day (UT).
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    pub frame: EclipticFrame,
    /// Ayanamsha applied, degrees.
    pub ayanamsha_deg: f64,
    /// Local apparent sidereal time, degrees.
    pub lst_deg: f64,
    pub lagna: AnglePlacement,
    pub midheaven: AnglePlacement,
    /// House system actually used; Equal when the requested one fell back.
    pub house_system_used: BhavaSystem,
    /// Sidereal houses, `bhavas[0]` = house 1.
    pub bhavas: [Bhava; 12],
    /// Indexed by [`Body::index`].
    pub placements: [Placement; 9],
}

impl Chart {
    pub fn placement(&self, body: Body) -> &Placement {
        &self.placements[body.index()]
    }

    /// Whether the requested house system was replaced by Equal houses.
    pub fn house_fell_back(&self) -> bool {
        self.house_system_used != self.config.house_system
    }

    /// Sidereal cusp longitudes, `cusps[0]` = house 1.
    pub fn cusps(&self) -> [f64; 12] {
        self.bhavas.map(|b| b.start_deg)
    }

    /// Bodies in house `house` (1..=12), in [`Body`] order.
    pub fn occupants(&self, house: u8) -> impl Iterator<Item = Body> + '_ {
        self.placements
            .iter()
            .filter(move |p| p.house == house)
            .map(|p| p.body)
    }
}

/// Compute a chart with default solver settings.
pub fn compute_chart(birth: &BirthData, config: &ChartConfig) -> Result<Chart, KundaliError> {
    compute_chart_with(
        birth,
        config,
        &KeplerSolver::default(),
        &CuspSolver::default(),
    )
}

/// Compute a chart with explicit Kepler and house cusp solvers.
///
/// Solver settings are validated before anything else; a rejected setting
/// is [`KundaliError::InvalidConfig`].
pub fn compute_chart_with(
    birth: &BirthData,
    config: &ChartConfig,
    kepler: &KeplerSolver,
    cusp_solver: &CuspSolver,
) -> Result<Chart, KundaliError> {
    kepler.validate().map_err(KundaliError::InvalidConfig)?;
    cusp_solver.validate().map_err(KundaliError::InvalidConfig)?;
    birth.validate()?;

    let jd = birth.jd_ut();
    let snapshot = compute_positions_with(jd, config.node_mode, kepler);
    let t = snapshot.t;
    let frame = snapshot.frame;
    let aya = ayanamsha_deg(config.ayanamsha, t);

    let angles = ChartAngles::compute(jd, &birth.location, &frame);
    let houses = house_cusps_with(
        config.house_system,
        angles.lst_deg,
        birth.location.latitude_deg,
        frame.true_obliquity_deg,
        cusp_solver,
    )
    .to_sidereal(aya);

    let placements = ALL_BODIES.map(|body| {
        let pos = snapshot.get(body);
        let sidereal_deg = normalize_deg(pos.longitude_deg - aya);
        let rashi = rashi_from_longitude(sidereal_deg);
        let nakshatra = nakshatra_from_longitude(sidereal_deg);
        Placement {
            body,
            tropical_deg: pos.longitude_deg,
            sidereal_deg,
            latitude_deg: pos.latitude_deg,
            distance_au: pos.distance_au,
            rashi: rashi.rashi,
            rashi_index: rashi.rashi_index,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra_index: nakshatra.nakshatra_index,
            pada: nakshatra.pada,
            house: planet_house_number(sidereal_deg, &houses.cusps),
            is_retrograde: pos.is_retrograde,
        }
    });

    let chart = Chart {
        birth: *birth,
        config: *config,
        jd,
        t,
        frame,
        ayanamsha_deg: aya,
        lst_deg: angles.lst_deg,
        lagna: AnglePlacement::new(angles.ascendant_deg, houses.lagna_deg),
        midheaven: AnglePlacement::new(angles.midheaven_deg, houses.mc_deg),
        house_system_used: houses.system_used,
        bhavas: houses.bhavas(),
        placements,
    };

    debug!(
        jd,
        ayanamsha = config.ayanamsha.name(),
        ayanamsha_deg = aya,
        lagna_deg = chart.lagna.sidereal_deg,
        house_system = houses.system_used.name(),
        "chart computed"
    );

    Ok(chart)
}

/// Chart for a birth date with unknown time, cast at local noon.
pub fn compute_chart_unknown_time(
    year: i32,
    month: u32,
    day: u32,
    utc_offset_hours: f64,
    location: GeoLocation,
    config: &ChartConfig,
) -> Result<Chart, KundaliError> {
    let time = CivilTime::new(year, month, day, 12, 0, 0.0, utc_offset_hours);
    compute_chart(&BirthData::new(time, location), config)
}

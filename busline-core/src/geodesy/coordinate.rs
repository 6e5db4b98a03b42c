use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, marker::PhantomData};

use super::{transform, Crs};

/// marker for a geodetic reference system a [`Coordinate`] is expressed in.
pub trait ReferenceSystem: Copy + Clone + std::fmt::Debug + PartialEq {
    const NAME: &'static str;
}

/// the obfuscated datum used by mainland Chinese mapping services
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gcj02;

/// the international datum, persisted as EPSG:4326
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wgs84;

impl ReferenceSystem for Gcj02 {
    const NAME: &'static str = "GCJ-02";
}

impl ReferenceSystem for Wgs84 {
    const NAME: &'static str = "WGS-84";
}

/// a (longitude, latitude) pair tagged with its reference system at the type level,
/// so that GCJ-02 and WGS-84 values cannot be mixed without an explicit transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate<S: ReferenceSystem> {
    lng: f64,
    lat: f64,
    #[serde(skip)]
    system: PhantomData<S>,
}

impl<S: ReferenceSystem> Coordinate<S> {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            lng,
            lat,
            system: PhantomData,
        }
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}

impl Coordinate<Gcj02> {
    /// parses a `"lng,lat"` string as delivered by AMap. returns None unless the
    /// string holds exactly two finite floats.
    pub fn parse_pair(s: &str) -> Option<Self> {
        let mut parts = s.split(',');
        let lng = parts.next()?.trim().parse::<f64>().ok()?;
        let lat = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() || !lng.is_finite() || !lat.is_finite() {
            return None;
        }
        Some(Self::new(lng, lat))
    }

    /// removes the GCJ-02 offset, see [`transform::to_wgs84`].
    pub fn to_wgs84(&self) -> Coordinate<Wgs84> {
        let (lng, lat) = transform::to_wgs84(self.lng, self.lat);
        Coordinate::new(lng, lat)
    }
}

impl Coordinate<Wgs84> {
    pub fn crs(&self) -> Crs {
        Crs::Epsg4326
    }
}

impl From<Coordinate<Wgs84>> for Coord<f64> {
    fn from(value: Coordinate<Wgs84>) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coordinate<Wgs84>> for Point<f64> {
    fn from(value: Coordinate<Wgs84>) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl<S: ReferenceSystem> Display for Coordinate<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{} ({})", self.lng, self.lat, S::NAME)
    }
}

#[cfg(test)]
mod test {
    use super::{Coordinate, Gcj02};

    #[test]
    fn test_parse_pair() {
        let c = Coordinate::<Gcj02>::parse_pair("116.397, 39.908").unwrap();
        assert_eq!((c.lng(), c.lat()), (116.397, 39.908));
        assert!(Coordinate::<Gcj02>::parse_pair("116.397").is_none());
        assert!(Coordinate::<Gcj02>::parse_pair("116.397,39.908,1").is_none());
        assert!(Coordinate::<Gcj02>::parse_pair("a,b").is_none());
        assert!(Coordinate::<Gcj02>::parse_pair("").is_none());
        assert!(Coordinate::<Gcj02>::parse_pair("NaN,39.9").is_none());
    }

    #[test]
    fn test_to_wgs84_changes_value_in_china() {
        let gcj = Coordinate::<Gcj02>::new(116.397, 39.908);
        let wgs = gcj.to_wgs84();
        assert_ne!(wgs.lng(), gcj.lng());
        assert_ne!(wgs.lat(), gcj.lat());
        assert_eq!(wgs.crs().to_string(), "EPSG:4326");
    }
}

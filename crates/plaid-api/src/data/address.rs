//! Addresses, as used by transactions and the `Info` product.

use serde::Deserialize;

/// A postal address, optionally with coordinates.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "AddressApiModel")]
pub struct Address {
    /// The address zip code part.
    pub zip: Option<String>,
    /// The address state part.
    pub state: Option<String>,
    /// The address city part.
    pub city: Option<String>,
    /// The address street part.
    pub street: Option<String>,
    /// Longitude.
    pub longitude: Option<f64>,
    /// Latitude.
    pub latitude: Option<f64>,
}

#[derive(Deserialize)]
struct AddressApiModel {
    zip: Option<String>,
    state: Option<String>,
    city: Option<String>,
    street: Option<String>,
    // Transaction locations use `address` for the street part.
    address: Option<String>,
    coordinates: Option<CoordinatesApiModel>,
}

#[derive(Deserialize)]
struct CoordinatesApiModel {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl From<AddressApiModel> for Address {
    fn from(api: AddressApiModel) -> Self {
        let (latitude, longitude) = match api.coordinates {
            Some(coordinates) => (coordinates.lat, coordinates.lon),
            None => (None, None),
        };

        Address {
            zip: api.zip,
            state: api.state,
            city: api.city,
            street: api.street.or(api.address),
            longitude,
            latitude,
        }
    }
}

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Widest accepted distance between a reported check-in location and
    // the client site, in kilometers
    #[serde(default = "default_max_site_distance_km")]
    pub max_site_distance_km: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            max_site_distance_km: default_max_site_distance_km(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_max_site_distance_km() -> f64 {
    0.5
}

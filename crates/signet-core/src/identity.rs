//! Device and environment fields stamped onto every request

use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};

/// Fixed device/environment fields merged into every outgoing parameter
/// set before signing
///
/// The wire keys (`osName`, `osVersion`, `deviceId`, `deviceBrand`,
/// `deviceModel`, `imei`) are what deployed servers expect; `imei` is
/// only sent when a hardware identifier is actually available. The
/// values come from configuration - this library never introspects the
/// platform it runs on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceProfile {
    pub os_name: String,
    pub os_version: String,
    pub device_id: String,
    pub device_brand: String,
    pub device_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<String>,
}

impl DeviceProfile {
    /// Merge this profile's fields into a parameter set
    ///
    /// Overwrites any request parameter that uses one of the reserved
    /// keys.
    pub fn apply_to(&self, params: &mut ParameterSet) {
        params.insert("osName", self.os_name.clone());
        params.insert("osVersion", self.os_version.clone());
        params.insert("deviceId", self.device_id.clone());
        params.insert("deviceBrand", self.device_brand.clone());
        params.insert("deviceModel", self.device_model.clone());
        if let Some(id) = &self.hardware_id {
            if !id.is_empty() {
                params.insert("imei", id.clone());
            }
        }
    }
}

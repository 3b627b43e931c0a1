/// Provider identifier - static constants like "VIACEP" or "APICEP"
pub type ProviderId = &'static str;

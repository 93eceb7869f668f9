quantity!(
    /// Liquid fuel consumption.
    LitersPer100Km, suffix: "l/100 km", precision: 1
);

quantity!(
    /// Electric energy consumption.
    KilowattHoursPer100Km, suffix: "kWh/100 km", precision: 1
);

pub struct TestCloud {
    pub bytes: &'static [u8],
    pub points: usize,
    /// Volume above `z = 0`.
    pub volume: f64,
}

/// Four corners of the unit square at `z = 2`, with an elevation column.
pub const CSV_FLAT_SQUARE: TestCloud = TestCloud {
    bytes: include_bytes!("../../../res/square/flat.csv"),
    points: 4,
    volume: 2.0,
};

/// The plane `z = 1 + x + y` over `[0, 2] x [0, 2]`, headerless.
pub const XYZ_TILTED_SQUARE: TestCloud = TestCloud {
    bytes: include_bytes!("../../../res/square/tilted.xyz"),
    points: 5,
    volume: 12.0,
};

/// A 100 x 100 square in UTM-like coordinates with a peak in the middle.
pub const CSV_PLATEAU: TestCloud = TestCloud {
    bytes: include_bytes!("../../../res/plateau/plateau.csv"),
    points: 5,
    volume: 200_000.0,
};

pub const DEFAULT_SIZES: [u64; 3] = [3_000, 300_000, 3_000_000];
pub const DEFAULT_WORKERS: usize = 4;
pub const OUTPUT_FILE: &str = "resultados_montecarlo_todos.csv";

// Fixed decimals per CSV column
pub const PI_PRECISION: usize = 12;
pub const SECONDS_PRECISION: usize = 12;
pub const SUBSECOND_PRECISION: usize = 8;

pub const FIELD_DELIMITER: u8 = b';';
pub const DECIMAL_SEPARATOR: &str = ",";

pub const HEADER: [&str; 7] = [
    "Samples",
    "Método",
    "Hilos",
    "Valor Pi",
    "Tiempo (s)",
    "Tiempo (ms)",
    "Tiempo (us)",
];

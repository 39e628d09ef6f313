//! LED 스트립 전원 사이징 계산 모듈을 모아둔다.
//! 밀도별 소비전력 보간, 배선 굵기, 드라이버 용량, 전압강하 기반 최대 길이로 구성한다.

pub mod calculator;
pub mod driver;
pub mod power_density;
pub mod voltage_drop;
pub mod wire_gauge;

pub use calculator::{
    calculate, calculate_led_requirements, round2, CalculationInput, CalculationResult,
    SAFETY_MARGIN,
};
pub use driver::{recommend_driver_capacity, DRIVER_CAPACITIES_A};
pub use power_density::{watts_per_meter, POWER_DENSITY_TABLE};
pub use voltage_drop::{max_run_length, MAX_RUN_SENTINEL_M};
pub use wire_gauge::{recommend_wire_gauge, WIRE_GAUGE_BREAKPOINTS};

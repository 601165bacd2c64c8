pub mod blinn_phong;

pub use blinn_phong::BlinnPhongShader;

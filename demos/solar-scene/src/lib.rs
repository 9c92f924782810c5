use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod scene;
mod starfield;
use scene::SolarScene;

orrery_web::export_scene!(SolarScene, "solar-scene");

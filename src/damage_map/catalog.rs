//! Fixed clickable regions of the four vehicle diagrams.
//!
//! Shapes are SVG path strings in the diagram's own coordinate space and are
//! only meaningful to whatever draws the diagram.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Side,
    Front,
    Rear,
    Top,
}

impl View {
    pub const ALL: [View; 4] = [View::Side, View::Front, View::Rear, View::Top];

    /// Accepts the English names and the Portuguese ones used by the web client.
    pub fn parse(value: &str) -> Option<View> {
        match value.trim().to_lowercase().as_str() {
            "side" | "lateral" => Some(View::Side),
            "front" | "frontal" => Some(View::Front),
            "rear" | "traseira" => Some(View::Rear),
            "top" | "topo" => Some(View::Top),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Side => "side",
            View::Front => "front",
            View::Rear => "rear",
            View::Top => "top",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Side => "Lateral",
            View::Front => "Frontal",
            View::Rear => "Traseira",
            View::Top => "Superior",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub display_name: &'static str,
    pub shape: &'static str,
}

const fn region(id: &'static str, display_name: &'static str, shape: &'static str) -> Region {
    Region {
        id,
        display_name,
        shape,
    }
}

pub static SIDE_REGIONS: [Region; 14] = [
    region("porta-dianteira", "Porta Dianteira", "M 150,180 L 230,180 L 230,280 L 150,280 Z"),
    region("porta-traseira", "Porta Traseira", "M 235,180 L 315,180 L 315,280 L 235,280 Z"),
    region("paralama-dianteiro", "Paralama Dianteiro", "M 80,200 L 145,200 L 145,280 L 80,280 Z"),
    region("paralama-traseiro", "Paralama Traseiro", "M 320,200 L 385,200 L 385,280 L 320,280 Z"),
    region("capo", "Capô", "M 80,150 L 180,130 L 180,175 L 80,195 Z"),
    region("teto", "Teto", "M 180,130 L 320,130 L 320,175 L 180,175 Z"),
    region("porta-malas", "Porta-malas", "M 320,130 L 385,150 L 385,195 L 320,175 Z"),
    region(
        "para-choque-dianteiro",
        "Para-choque Dianteiro",
        "M 50,250 L 75,250 L 75,290 L 50,290 Z",
    ),
    region(
        "para-choque-traseiro",
        "Para-choque Traseiro",
        "M 390,250 L 415,250 L 415,290 L 390,290 Z",
    ),
    region("roda-dianteira", "Roda Dianteira", "M 90,280 L 130,280 L 130,320 L 90,320 Z"),
    region("roda-traseira", "Roda Traseira", "M 330,280 L 370,280 L 370,320 L 330,320 Z"),
    region("retrovisor", "Retrovisor", "M 145,165 L 165,165 L 165,180 L 145,180 Z"),
    region("macaneta-dianteira", "Maçaneta Dianteira", "M 200,220 L 220,220 L 220,235 L 200,235 Z"),
    region("macaneta-traseira", "Maçaneta Traseira", "M 285,220 L 305,220 L 305,235 L 285,235 Z"),
];

pub static FRONT_REGIONS: [Region; 10] = [
    region("capo-frontal", "Capô", "M 150,180 L 350,180 L 340,250 L 160,250 Z"),
    region("para-brisa", "Para-brisa", "M 160,130 L 340,130 L 350,175 L 150,175 Z"),
    region("grade", "Grade", "M 200,255 L 300,255 L 300,280 L 200,280 Z"),
    region("farol-esquerdo", "Farol Esquerdo", "M 160,255 L 195,255 L 195,275 L 160,275 Z"),
    region("farol-direito", "Farol Direito", "M 305,255 L 340,255 L 340,275 L 305,275 Z"),
    region("para-choque-frontal", "Para-choque", "M 150,285 L 350,285 L 350,310 L 150,310 Z"),
    region(
        "retrovisor-esquerdo",
        "Retrovisor Esquerdo",
        "M 120,180 L 145,180 L 145,210 L 120,210 Z",
    ),
    region("retrovisor-direito", "Retrovisor Direito", "M 355,180 L 380,180 L 380,210 L 355,210 Z"),
    region(
        "roda-frontal-esquerda",
        "Roda Frontal Esquerda",
        "M 130,310 L 170,310 L 170,350 L 130,350 Z",
    ),
    region(
        "roda-frontal-direita",
        "Roda Frontal Direita",
        "M 330,310 L 370,310 L 370,350 L 330,350 Z",
    ),
];

pub static REAR_REGIONS: [Region; 8] = [
    region("porta-malas-traseira", "Tampa Traseira", "M 160,180 L 340,180 L 340,250 L 160,250 Z"),
    region("vidro-traseiro", "Vidro Traseiro", "M 170,130 L 330,130 L 340,175 L 160,175 Z"),
    region("lanterna-esquerda", "Lanterna Esquerda", "M 160,255 L 195,255 L 195,275 L 160,275 Z"),
    region("lanterna-direita", "Lanterna Direita", "M 305,255 L 340,255 L 340,275 L 305,275 Z"),
    region(
        "para-choque-traseiro-view",
        "Para-choque Traseiro",
        "M 150,285 L 350,285 L 350,310 L 150,310 Z",
    ),
    region("placa", "Placa", "M 220,260 L 280,260 L 280,280 L 220,280 Z"),
    region(
        "roda-traseira-esquerda",
        "Roda Traseira Esquerda",
        "M 130,310 L 170,310 L 170,350 L 130,350 Z",
    ),
    region(
        "roda-traseira-direita",
        "Roda Traseira Direita",
        "M 330,310 L 370,310 L 370,350 L 330,350 Z",
    ),
];

pub static TOP_REGIONS: [Region; 7] = [
    region("capo-topo", "Capô", "M 150,100 L 250,100 L 250,180 L 150,180 Z"),
    region("teto-topo", "Teto", "M 150,185 L 250,185 L 250,315 L 150,315 Z"),
    region("porta-malas-topo", "Porta-malas", "M 150,320 L 250,320 L 250,400 L 150,400 Z"),
    region("lateral-esquerda", "Lateral Esquerda", "M 100,100 L 145,100 L 145,400 L 100,400 Z"),
    region("lateral-direita", "Lateral Direita", "M 255,100 L 300,100 L 300,400 L 255,400 Z"),
    region("para-brisa-topo", "Para-brisa", "M 160,150 L 240,150 L 240,175 L 160,175 Z"),
    region("vidro-traseiro-topo", "Vidro Traseiro", "M 160,325 L 240,325 L 240,350 L 160,350 Z"),
];

pub fn regions_for(view: View) -> &'static [Region] {
    match view {
        View::Side => &SIDE_REGIONS,
        View::Front => &FRONT_REGIONS,
        View::Rear => &REAR_REGIONS,
        View::Top => &TOP_REGIONS,
    }
}

/// Every region paired with the view it belongs to, in catalog order.
pub fn all_regions() -> impl Iterator<Item = (View, &'static Region)> {
    View::ALL
        .into_iter()
        .flat_map(|view| regions_for(view).iter().map(move |region| (view, region)))
}

pub fn find_region(id: &str) -> Option<(View, &'static Region)> {
    all_regions().find(|(_, region)| region.id == id)
}

/// Display name for a stored damage id; unknown ids come back unchanged.
pub fn region_name(id: &str) -> &str {
    match find_region(id) {
        Some((_, region)) => region.display_name,
        None => id,
    }
}

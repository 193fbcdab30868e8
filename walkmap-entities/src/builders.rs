pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::dataset_builder::*;

pub mod dataset_builder {

    use super::*;
    use crate::{geo::*, geometry::*, walkability::*};

    #[derive(Debug)]
    pub struct DatasetBuild {
        dataset: WalkabilityDataset,
    }

    impl DatasetBuild {
        pub fn center(mut self, lat: f64, lng: f64) -> Self {
            self.dataset.center = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn category(mut self, name: &str, weight: f64, nearby_count: u64, buffer_m: f64) -> Self {
            self.dataset
                .breakdown
                .get_or_insert_with(Vec::new)
                .push(CategoryBreakdown {
                    name: name.into(),
                    weight,
                    nearby_count,
                    buffer_m,
                });
            self
        }
        pub fn poi(mut self, name: Option<&str>, category: &str, geometry: Geometry) -> Self {
            self.dataset.nearby.push(Poi {
                name: name.map(Into::into),
                category: category.into(),
                geometry: Some(geometry),
            });
            self
        }
        pub fn gradient_cell(mut self, score: Option<f64>, geometry: Geometry) -> Self {
            self.dataset
                .gradient
                .get_or_insert_with(Vec::new)
                .push(GradientCell { score, geometry });
            self
        }
        pub fn index(mut self, index: f64) -> Self {
            self.dataset.index = index;
            self
        }
        pub fn finish(self) -> WalkabilityDataset {
            self.dataset
        }
    }

    impl Builder for WalkabilityDataset {
        type Build = DatasetBuild;
        fn build() -> DatasetBuild {
            DatasetBuild {
                dataset: WalkabilityDataset {
                    center: MapPoint::from_lat_lng_deg(45.5017, -73.5673),
                    breakdown: None,
                    nearby: vec![],
                    gradient: None,
                    index: 0.0,
                },
            }
        }
    }

    /// Square polygon with its lower left corner at `(lat, lng)`.
    pub fn square(lat: f64, lng: f64, size: f64) -> Geometry {
        let ring = vec![
            MapPoint::from_lat_lng_deg(lat, lng),
            MapPoint::from_lat_lng_deg(lat, lng + size),
            MapPoint::from_lat_lng_deg(lat + size, lng + size),
            MapPoint::from_lat_lng_deg(lat + size, lng),
        ];
        Geometry::Polygon(vec![ring])
    }

    pub fn point(lat: f64, lng: f64) -> Geometry {
        Geometry::Point(MapPoint::from_lat_lng_deg(lat, lng))
    }
}

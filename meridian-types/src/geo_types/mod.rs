mod coord;
mod multi_polygon;

//! Positioned nodes and drawn edges kept 1:1 with an [`UndirectedGraph`].
//!
//! Rendering objects belong to the host; a [`Drawing`] only asks its [`ObjectFactory`] to create
//! them when a node or edge appears and to release them when it goes away.

use crate::config::ForceConfig;
use crate::error::{Error, Result};
use crate::geom::{Point, Rect, point, segments_intersect};
use rand::Rng;
use rustc_hash::FxBuildHasher;
use vertexlab_graph::{UndirectedGraph, VertexId};

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

pub type EdgeId = usize;

/// Host-side creation and release of rendering objects.
pub trait ObjectFactory {
    type NodeHandle;
    type EdgeHandle;

    fn create_node(&mut self, id: VertexId, position: Point) -> Self::NodeHandle;
    fn create_edge(&mut self, id: EdgeId, first: VertexId, second: VertexId) -> Self::EdgeHandle;
    fn release_node(&mut self, handle: Self::NodeHandle);
    fn release_edge(&mut self, handle: Self::EdgeHandle);
}

/// Factory for drawings without any rendering side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl ObjectFactory for Headless {
    type NodeHandle = ();
    type EdgeHandle = ();

    fn create_node(&mut self, _id: VertexId, _position: Point) {}
    fn create_edge(&mut self, _id: EdgeId, _first: VertexId, _second: VertexId) {}
    fn release_node(&mut self, _handle: ()) {}
    fn release_edge(&mut self, _handle: ()) {}
}

#[derive(Debug, Clone)]
pub struct PositionedNode<H> {
    id: VertexId,
    position: Point,
    handle: H,
}

impl<H> PositionedNode<H> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

#[derive(Debug, Clone)]
pub struct DrawnEdge<H> {
    id: EdgeId,
    first: VertexId,
    second: VertexId,
    handle: H,
}

impl<H> DrawnEdge<H> {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn first(&self) -> VertexId {
        self.first
    }

    pub fn second(&self) -> VertexId {
        self.second
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn touches(&self, v: VertexId) -> bool {
        self.first == v || self.second == v
    }

    pub fn shares_endpoint_with<G>(&self, other: &DrawnEdge<G>) -> bool {
        self.touches(other.first) || self.touches(other.second)
    }
}

pub struct Drawing<F: ObjectFactory = Headless> {
    graph: UndirectedGraph,
    nodes: IndexMap<VertexId, PositionedNode<F::NodeHandle>>,
    edges: IndexMap<EdgeId, DrawnEdge<F::EdgeHandle>>,
    next_edge_id: EdgeId,
    factory: F,
}

impl<F: ObjectFactory> Drawing<F> {
    pub fn new(factory: F) -> Self {
        Self {
            graph: UndirectedGraph::new(),
            nodes: IndexMap::default(),
            edges: IndexMap::default(),
            next_edge_id: 0,
            factory,
        }
    }

    /// Draws every vertex of `graph` at `place(id)` and every edge with ids counted from 0.
    pub fn from_graph<P>(graph: UndirectedGraph, factory: F, mut place: P) -> Self
    where
        P: FnMut(VertexId) -> Point,
    {
        let mut drawing = Self::new(factory);
        for id in graph.vertex_ids() {
            let position = place(id);
            let handle = drawing.factory.create_node(id, position);
            drawing.nodes.insert(
                id,
                PositionedNode {
                    id,
                    position,
                    handle,
                },
            );
        }
        for (first, second) in graph.edges() {
            drawing.push_edge(first, second);
        }
        drawing.graph = graph;
        drawing
    }

    /// Draws `graph` with every node at a uniformly random position inside the padded area.
    pub fn scatter<R: Rng + ?Sized>(
        graph: UndirectedGraph,
        factory: F,
        config: &ForceConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let (lo, hi_x, hi_y) = (
            config.paddings,
            config.area_width - config.paddings,
            config.area_height - config.paddings,
        );
        Ok(Self::from_graph(graph, factory, |_| {
            point(rng.gen_range(lo..hi_x), rng.gen_range(lo..hi_y))
        }))
    }

    fn push_edge(&mut self, first: VertexId, second: VertexId) -> EdgeId {
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        let handle = self.factory.create_edge(id, first, second);
        self.edges.insert(
            id,
            DrawnEdge {
                id,
                first,
                second,
                handle,
            },
        );
        id
    }

    pub fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut UndirectedGraph {
        &mut self.graph
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PositionedNode<F::NodeHandle>> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &DrawnEdge<F::EdgeHandle>> {
        self.edges.values()
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().copied().collect()
    }

    pub fn node(&self, id: VertexId) -> Option<&PositionedNode<F::NodeHandle>> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&DrawnEdge<F::EdgeHandle>> {
        self.edges.get(&id)
    }

    pub fn find_edge(&self, v: VertexId, w: VertexId) -> Option<EdgeId> {
        self.edges
            .values()
            .find(|e| (e.first == v && e.second == w) || (e.first == w && e.second == v))
            .map(|e| e.id)
    }

    pub fn position(&self, id: VertexId) -> Option<Point> {
        self.nodes.get(&id).map(|n| n.position)
    }

    pub fn set_position(&mut self, id: VertexId, position: Point) -> Result<()> {
        let node = self.nodes.get_mut(&id).ok_or(Error::UnknownNode { id })?;
        node.position = position;
        Ok(())
    }

    pub(crate) fn positions_mut(&mut self) -> impl Iterator<Item = (VertexId, &mut Point)> {
        self.nodes.values_mut().map(|n| (n.id, &mut n.position))
    }

    pub fn add_node(&mut self, id: VertexId, position: Point) -> Result<()> {
        self.graph.add_vertex(id)?;
        let handle = self.factory.create_node(id, position);
        self.nodes.insert(
            id,
            PositionedNode {
                id,
                position,
                handle,
            },
        );
        Ok(())
    }

    /// Connects two drawn nodes, returning the (possibly pre-existing) edge id.
    pub fn connect(&mut self, v: VertexId, w: VertexId) -> Result<EdgeId> {
        if let Some(id) = self.find_edge(v, w) {
            return Ok(id);
        }
        self.graph.connect(v, w)?;
        Ok(self.push_edge(v, w))
    }

    /// Disconnects the edge's endpoints and releases the drawn edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<()> {
        let edge = self
            .edges
            .shift_remove(&id)
            .ok_or(Error::UnknownEdge { id })?;
        self.graph.disconnect(edge.first, edge.second)?;
        self.factory.release_edge(edge.handle);
        Ok(())
    }

    /// Removes a node together with its incident edges.
    pub fn remove_node(&mut self, id: VertexId) -> Result<()> {
        if !self.nodes.contains_key(&id) {
            return Err(Error::UnknownNode { id });
        }
        let incident: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| e.touches(id))
            .map(|e| e.id)
            .collect();
        for edge in incident {
            self.remove_edge(edge)?;
        }
        self.graph.remove_vertex(id)?;
        if let Some(node) = self.nodes.shift_remove(&id) {
            self.factory.release_node(node.handle);
        }
        Ok(())
    }

    /// Releases every node and edge and hands the factory back.
    pub fn release_all(mut self) -> F {
        for (_, edge) in self.edges.drain(..) {
            self.factory.release_edge(edge.handle);
        }
        for (_, node) in self.nodes.drain(..) {
            self.factory.release_node(node.handle);
        }
        self.factory
    }

    pub fn edge_segment(&self, id: EdgeId) -> Option<(Point, Point)> {
        let edge = self.edges.get(&id)?;
        Some((self.position(edge.first)?, self.position(edge.second)?))
    }

    pub fn edge_length(&self, id: EdgeId) -> Option<f64> {
        self.edge_segment(id).map(|(a, b)| (b - a).length())
    }

    /// Whether either endpoint of the edge has degree 1.
    pub fn edge_touches_leaf(&self, id: EdgeId) -> bool {
        self.edges
            .get(&id)
            .is_some_and(|e| self.graph.degree(e.first) == 1 || self.graph.degree(e.second) == 1)
    }

    /// Ordered pairs of crossing edges that share no endpoint. Every crossing shows up twice,
    /// once from each side.
    pub fn intersecting_edge_pairs(&self) -> Vec<(EdgeId, EdgeId)> {
        let segments: Vec<(EdgeId, &DrawnEdge<F::EdgeHandle>, Point, Point)> = self
            .edges
            .values()
            .filter_map(|e| {
                let (a, b) = self.edge_segment(e.id)?;
                Some((e.id, e, a, b))
            })
            .collect();

        let mut out = Vec::new();
        for &(id1, e1, a1, a2) in &segments {
            for &(id2, e2, b1, b2) in &segments {
                if e1.shares_endpoint_with(e2) {
                    continue;
                }
                if segments_intersect(a1, a2, b1, b2) {
                    out.push((id1, id2));
                }
            }
        }
        out
    }

    /// Number of crossing edge pairs, each pair counted once.
    pub fn intersection_count(&self) -> usize {
        self.intersecting_edge_pairs().len() / 2
    }

    pub fn bounds(&self) -> Option<Rect> {
        if self.nodes.is_empty() {
            return None;
        }
        Some(euclid::Box2D::from_points(self.nodes.values().map(|n| n.position)).to_rect())
    }
}

impl Drawing<Headless> {
    pub fn headless() -> Self {
        Self::new(Headless)
    }
}

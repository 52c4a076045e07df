mod sink_factory;

pub use sink_factory::SinkFactory;

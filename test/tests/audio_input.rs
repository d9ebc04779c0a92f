use vabridge_cluster::{ClusterError, SignalSourceError, SourceKey};
use vabridge_shared::SignalSourceId;
use vabridge_test::{ServerCall, TestCluster};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn master_binds_input_channel() {
    init_logging();
    let mut cluster = TestCluster::new(2);
    let key = cluster.master().add_audio_input_source(2);
    cluster.node(1).add_audio_input_source(2);

    cluster.master().initialize_audio_input(&key).unwrap();
    cluster.node(1).initialize_audio_input(&key).unwrap();

    let master = cluster.nodes[0].audio_input_source(&key).unwrap();
    assert!(master.is_initialized());
    assert_eq!(master.id(), &SignalSourceId::new("input-2"));
    assert_eq!(cluster.servers[0].calls(), vec![ServerCall::AudioInput(2)]);

    let slave = cluster.nodes[1].audio_input_source(&key).unwrap();
    assert!(slave.is_initialized());
    assert!(!slave.id().is_valid());
}

#[test]
fn channel_zero_is_raised_to_one() {
    let mut cluster = TestCluster::new(1);
    let key = cluster.master().add_audio_input_source(0);
    assert_eq!(cluster.nodes[0].audio_input_source(&key).unwrap().channel(), 1);
}

#[test]
fn unknown_channel_fails_initialization() {
    init_logging();
    let mut cluster = TestCluster::new(1);
    let key = cluster.master().add_audio_input_source(8);

    assert_eq!(
        cluster.master().initialize_audio_input(&key),
        Err(ClusterError::SignalSource(
            SignalSourceError::InvalidAudioInput { channel: 8 }
        ))
    );
    assert!(!cluster.nodes[0].audio_input_source(&key).unwrap().is_initialized());
}

#[test]
fn input_sources_are_not_audiofiles() {
    let mut cluster = TestCluster::new(1);
    let key = cluster.master().add_audio_input_source(1);

    assert!(cluster.master().audiofile_source_mut(&key).is_none());
    assert_eq!(
        cluster.master().initialize_audio_input(&SourceKey(99)),
        Err(ClusterError::UnknownSource { key: SourceKey(99) })
    );

    assert!(cluster.master().remove_source(&key));
    assert!(!cluster.master().remove_source(&key));
    assert!(cluster.nodes[0].audio_input_source(&key).is_none());
}

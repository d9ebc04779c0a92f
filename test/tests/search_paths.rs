use vabridge_client::{LauncherClient, LauncherConfig, SearchPaths};
use vabridge_cluster::ClusterError;
use vabridge_shared::{AudioServerError, NodeRole, ReproductionMode};
use vabridge_test::{
    MemoryFiles, ScriptedLauncher, ServerCall, TestCluster, LAUNCHER_HOST, LAUNCHER_PORT,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn uploaded_project_path_reaches_the_server_once() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher
        .reply_text("ack")
        .reply_text("ack")
        .reply_text("ack")
        .reply(b"g");
    let config = LauncherConfig {
        project_name: "ProjA".to_string(),
        ..LauncherConfig::default()
    };
    let files = MemoryFiles::new().with_file("cfg.ini", &[0u8; 42], 1_700_000_000);
    let mut client = LauncherClient::new(config, NodeRole::Master, launcher.dialer(), files);
    client
        .remote_start(
            LAUNCHER_HOST,
            LAUNCHER_PORT,
            "2022a",
            Some("cfg.ini"),
            ReproductionMode::Binaural,
        )
        .unwrap();

    let mut cluster = TestCluster::new(1);
    assert_eq!(cluster.master().apply_search_paths(client.search_paths_mut()), Ok(1));
    assert_eq!(cluster.master().apply_search_paths(client.search_paths_mut()), Ok(0));

    assert_eq!(
        cluster.servers[0].calls(),
        vec![ServerCall::AddSearchPath("../tmp/ProjA".to_string())]
    );
}

#[test]
fn refused_path_is_queued_again() {
    init_logging();
    let mut cluster = TestCluster::new(1);
    cluster.servers[0].reject_search_paths(true);
    let mut search_paths = SearchPaths::new();
    search_paths.register(SearchPaths::for_project("ProjA"));

    let result = cluster.master().apply_search_paths(&mut search_paths);
    assert!(matches!(
        result,
        Err(ClusterError::Server(AudioServerError::Rejected { .. }))
    ));

    cluster.servers[0].reject_search_paths(false);
    assert_eq!(cluster.master().apply_search_paths(&mut search_paths), Ok(1));
}

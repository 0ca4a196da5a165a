use drex::{
  App,
  config::Config,
  executor::LocalExecutor,
  runtime,
  source::LocalSource,
  trace,
};

fn print_version()
{
  println!("drex {}", env!("CARGO_PKG_VERSION"));
}

fn print_help()
{
  println!(
    "Usage: drex [OPTIONS] [DIR]\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
           --site NAME       Label for the serving root (default: DIR name)\n\
           --remote          Treat the session as non-local (disables exec/browse)\n\
           --hidden          Show dotfiles\n\
           --mode MODE       Initial explorer mode: table|gallery|gallery2\n\
           --date-format FMT chrono format for the modified column\n\
           --trace[=FILE]    Enable tracing to FILE (default /tmp/drex-trace.log)\n\
     Arguments:\n\
       DIR                   Serve directory DIR (default: current dir)\n"
  );
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  use std::env;
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut dir_arg: Option<String> = None;
  let mut site_arg: Option<String> = None;
  let mut config = Config::default();
  while let Some(a) = args.next()
  {
    match a.as_str()
    {
      "-h" | "--help" =>
      {
        print_help();
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      "--remote" =>
      {
        config.is_local = false;
      }
      "--hidden" =>
      {
        config.show_hidden = true;
      }
      "--site" =>
      {
        match args.next()
        {
          Some(name) => site_arg = Some(name),
          None =>
          {
            eprintln!("drex: --site requires a NAME argument");
            print_help();
            std::process::exit(2);
          }
        }
      }
      "--mode" =>
      {
        match args.next().as_deref().and_then(drex::enums::explorer_mode_from_str)
        {
          Some(mode) => config.start_mode = mode,
          None =>
          {
            eprintln!("drex: --mode requires table, gallery, or gallery2");
            print_help();
            std::process::exit(2);
          }
        }
      }
      "--date-format" =>
      {
        match args.next()
        {
          Some(fmt) => config.date_format = Some(fmt),
          None =>
          {
            eprintln!("drex: --date-format requires a FMT argument");
            print_help();
            std::process::exit(2);
          }
        }
      }
      s if s == "--trace" || s.starts_with("--trace=") =>
      {
        let file = s
          .split_once('=')
          .map(|(_, fp)| std::path::PathBuf::from(fp))
          .filter(|p| !p.as_os_str().is_empty());
        trace::enable(file);
      }
      "--" =>
      {
        dir_arg = args.next();
        break;
      }
      s if s.starts_with('-') =>
      {
        eprintln!("drex: unknown option: {}", s);
        print_help();
        std::process::exit(2);
      }
      other =>
      {
        if dir_arg.is_none()
        {
          dir_arg = Some(other.to_string());
        }
      }
    }
  }

  let root = match dir_arg
  {
    Some(d) => std::path::PathBuf::from(d),
    None => env::current_dir()?,
  };
  if !root.is_dir()
  {
    eprintln!("drex: '{}' is not a directory", root.display());
    std::process::exit(1);
  }
  config.site_name = site_arg.unwrap_or_else(|| {
    root
      .file_name()
      .map(|s| s.to_string_lossy().to_string())
      .unwrap_or_else(|| root.display().to_string())
  });

  trace::log("[main] starting drex");
  let mut source =
    LocalSource::new(root.clone(), &config.site_name, config.show_hidden);
  let mut executor = LocalExecutor::new(root, config.is_local);
  let mut app = App::new(config);
  app.request_navigation("");
  if let Err(e) = runtime::run_app(&mut app, &mut source, &mut executor)
  {
    trace::log(format!("[error] runtime::run_app: {e}"));
    return Err(e);
  }
  Ok(())
}

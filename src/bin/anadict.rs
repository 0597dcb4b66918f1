extern crate clap;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::time::SystemTime;

use clap::{App, Arg, SubCommand};
use rayon::prelude::*;
use serde::Serialize;

use anadict::*;

///One probe and everything the dictionary found for it
#[derive(Serialize)]
struct ProbeResult {
    probe: String,
    anagrams: Vec<String>,
}

fn lookup_probe(dict: &AnagramDict, probe: &str) -> ProbeResult {
    ProbeResult {
        probe: probe.to_string(),
        anagrams: dict
            .get_anagrams(probe)
            .iter()
            .map(|word| word.to_string())
            .collect(),
    }
}

fn output_result_as_tsv(result: &ProbeResult) {
    print!("{}", result.probe);
    for word in result.anagrams.iter() {
        print!("\t{}", word);
    }
    println!();
}

fn show_progress(seqnr: usize, lasttime: SystemTime) -> SystemTime {
    let now = SystemTime::now();
    if lasttime >= now || seqnr <= 1 {
        eprintln!("@ {}", seqnr);
    } else {
        let elapsed = now.duration_since(lasttime).expect("clock can't go backwards").as_millis();
        let rate = 1000.0 / (elapsed as f64 / 1000.0);
        eprintln!("@ {} - reading speed was {:.0} lines per second", seqnr, rate);
    }
    now
}

fn process(dict: &AnagramDict, inputstream: impl Read, json: bool, single_thread: bool, progress: bool) {
    let mut probes: Vec<String> = Vec::new();
    let mut progresstime = SystemTime::now();
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        if let Ok(line) = line {
            probes.push(line);
            if progress && probes.len() % 1000 == 0 {
                progresstime = show_progress(probes.len(), progresstime);
            }
        }
    }

    //lookups are read-only so probe batches can be looked up in parallel
    let begintime = SystemTime::now();
    let results: Vec<ProbeResult> = if single_thread {
        probes.iter().map(|probe| lookup_probe(dict, probe)).collect()
    } else {
        probes.par_iter().map(|probe| lookup_probe(dict, probe)).collect()
    };
    if let Ok(duration) = begintime.elapsed() {
        eprintln!("(looked up {} probes in {} μs)", results.len(), duration.as_micros());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results).expect("serializing results"));
    } else {
        for result in results.iter() {
            output_result_as_tsv(result);
        }
    }
}

pub fn common_arguments<'a, 'b>() -> Vec<clap::Arg<'a, 'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("wordlist")
        .long("wordlist")
        .short("w")
        .help("Wordlist to load into the dictionary, one word per line. Entries are normalized on insertion: non-letter characters are stripped and letters are lowercased. This option may be used multiple times for multiple wordlists.")
        .takes_value(true)
        .number_of_values(1)
        .multiple(true)
        .required(true));
    args.push(Arg::with_name("capacity")
        .long("capacity")
        .short("c")
        .help("Number of buckets in the table, fixed for the lifetime of the dictionary. Choose a prime for the best spread; inspect the spread with the stats subcommand.")
        .takes_value(true)
        .default_value("49999"));
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of tsv")
        .required(false));
    args.push(Arg::with_name("progress")
        .long("progress")
        .help("Show progress while reading probes")
        .required(false));
    args.push(Arg::with_name("single-thread")
        .long("single-thread")
        .help("Look up probes on a single thread instead of leveraging multiple cores")
        .required(false));
    args.push(Arg::with_name("files")
        .help("Input files with probes, one per line (defaults to standard input)")
        .takes_value(true)
        .multiple(true)
        .required(false));
    args
}

fn main() {
    let rootargs = App::new("Anadict")
        .version("0.1")
        .about("Anagram dictionary: finds every stored word whose letters are a permutation of the probe's letters")
        .subcommand(
            SubCommand::with_name("query")
                .about("Look up probes against the dictionary; reads probes from files or standard input, one per line")
                .args(&common_arguments())
        )
        .subcommand(
            SubCommand::with_name("index")
                .about("Compute and output the anagram index, one line per non-empty bucket")
                .args(&common_arguments())
        )
        .subcommand(
            SubCommand::with_name("stats")
                .about("Output occupancy statistics for the bucket array, for tuning the capacity")
                .args(&common_arguments())
        )
        .arg(Arg::with_name("debug")
            .long("debug")
            .short("D")
            .help("Debug")
            .required(false))
        .get_matches();

    eprintln!("Initializing dictionary...");

    let args = if let Some(args) = rootargs.subcommand_matches("query") {
        args
    } else if let Some(args) = rootargs.subcommand_matches("index") {
        args
    } else if let Some(args) = rootargs.subcommand_matches("stats") {
        args
    } else {
        panic!("No command specified");
    };

    let capacity: usize = args.value_of("capacity").unwrap().parse::<usize>().expect("Capacity should be a positive integer");

    let mut dict = AnagramDict::with_capacity(capacity, rootargs.is_present("debug"));

    eprintln!("Loading wordlists...");

    for filename in args.values_of("wordlist").unwrap().collect::<Vec<&str>>() {
        let count = dict.read_wordlist(filename).expect(&format!("Error reading wordlist {}", filename));
        eprintln!(" - Read {} words from {}", count, filename);
    }
    eprintln!(" - Dictionary holds {} words", dict.len());

    let json = args.is_present("json");

    if rootargs.subcommand_matches("index").is_some() {
        eprintln!("Computing and outputting anagram index...");
        for (bucketnr, bucket) in dict.buckets.iter().enumerate() {
            if !bucket.is_empty() {
                print!("{}", bucketnr);
                for word in bucket.iter() {
                    print!("\t{}", word);
                }
                println!()
            }
        }
    } else if rootargs.subcommand_matches("stats").is_some() {
        eprintln!("Computing index statistics...");
        let stats = dict.stats();
        if json {
            println!("{}", serde_json::to_string_pretty(&stats).expect("serializing stats"));
        } else {
            println!("capacity\t{}", stats.capacity);
            println!("entries\t{}", stats.entries);
            println!("occupied\t{}", stats.occupied);
            println!("max_chain\t{}", stats.max_chain);
        }
    } else {
        //query
        eprintln!("Querying the dictionary...");

        let single_thread = args.is_present("single-thread");
        let progress = args.is_present("progress");

        let files: Vec<_> = if args.is_present("files") {
            args.values_of("files").unwrap().collect()
        } else {
            vec!["-"]
        };
        for filename in files {
            match filename {
                "-" | "STDIN" | "stdin" => {
                    eprintln!("(accepting standard input; enter probes to look up, one per line)");
                    let stdin = io::stdin();
                    process(&dict, stdin, json, single_thread, progress);
                },
                _ => {
                    let f = File::open(filename).expect(format!("ERROR: Unable to open file {}", filename).as_str());
                    process(&dict, f, json, single_thread, progress);
                }
            }
        }
    }
}

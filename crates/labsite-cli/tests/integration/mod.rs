mod build_site;
mod check_inputs;
mod output_location;
